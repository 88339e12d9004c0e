use crate::VdError;

/// Floating point type used for every model signal.
pub type Real = f64;

/// Bitwise equality, so NaN payloads and signed zeros compare exactly.
pub fn bit_equal(a: Real, b: Real) -> bool {
    a.to_bits() == b.to_bits()
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, VdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VdError::NonFinite { what, value: v })
    }
}
