//! Typed read/write of named parameters.
//!
//! Two surfaces share one implementation:
//! - `try_set_parameter` / `try_get_parameter` return `AdapterResult`, so a
//!   missing name is distinguishable from a stored `0.0`.
//! - `set_parameter` / `get_parameter` fold failures into sentinels: `-1`
//!   for an unknown name on write, `0.0` for any failed read. A parameter
//!   with an unrecognized data type is silently skipped: the write reports
//!   the resolved address index and leaves the slot untouched.

use tracing::{debug, warn};
use vd_model::GeneratedModel;

use crate::error::{AdapterError, AdapterResult};
use crate::resolver::{NOT_FOUND, ParameterKind, ParameterResolver, ResolvedParameter};

/// Outcome of a successful typed write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterWrite {
    pub address_index: usize,
    /// Value as it reads back after storage (narrowed for byte slots).
    pub stored: f64,
}

/// Narrow a double into a byte slot.
///
/// Truncates toward zero and saturates into `[0, 255]`; NaN stores `0`.
#[inline]
pub fn narrow_to_byte(value: f64) -> u8 {
    value as u8
}

fn resolve<M: GeneratedModel + ?Sized>(model: &M, name: &str) -> AdapterResult<ResolvedParameter> {
    ParameterResolver::new(model.mapping_info())
        .resolve(name)
        .ok_or_else(|| AdapterError::ParameterNotFound {
            name: name.to_string(),
        })
}

fn unsupported(name: &str, resolved: ResolvedParameter) -> AdapterError {
    let label = match resolved.kind {
        ParameterKind::Unsupported { label } => label,
        _ => String::new(),
    };
    AdapterError::UnsupportedDataType {
        name: name.to_string(),
        label,
        address_index: resolved.address_index,
    }
}

/// Write `value` into the parameter named `name`.
pub fn try_set_parameter<M: GeneratedModel + ?Sized>(
    model: &mut M,
    name: &str,
    value: f64,
) -> AdapterResult<ParameterWrite> {
    let resolved = resolve(model, name)?;
    write_resolved(model, name, resolved, value)
}

fn write_resolved<M: GeneratedModel + ?Sized>(
    model: &mut M,
    name: &str,
    resolved: ResolvedParameter,
    value: f64,
) -> AdapterResult<ParameterWrite> {
    let addr = resolved.address_index;
    let stored = match resolved.kind {
        ParameterKind::Real => {
            model.data_address_map_mut().write_real(addr, value)?;
            value
        }
        ParameterKind::Boolean => {
            let byte = narrow_to_byte(value);
            model.data_address_map_mut().write_byte(addr, byte)?;
            f64::from(byte)
        }
        ParameterKind::Unsupported { .. } => return Err(unsupported(name, resolved)),
    };
    debug!(parameter = name, address = addr, value, stored, "parameter written");
    Ok(ParameterWrite {
        address_index: addr,
        stored,
    })
}

/// Read the parameter named `name` as a double.
pub fn try_get_parameter<M: GeneratedModel + ?Sized>(model: &M, name: &str) -> AdapterResult<f64> {
    let resolved = resolve(model, name)?;
    let addr = resolved.address_index;
    match resolved.kind {
        ParameterKind::Real => Ok(model.data_address_map().read_real(addr)?),
        ParameterKind::Boolean => Ok(f64::from(model.data_address_map().read_byte(addr)?)),
        ParameterKind::Unsupported { .. } => Err(unsupported(name, resolved)),
    }
}

/// Sentinel form of [`try_set_parameter`].
///
/// Returns the address index on success or when the data type is not
/// recognized (nothing is written in that case), and [`NOT_FOUND`] when no
/// parameter has this name. An address index that does not fit in `i32`
/// cannot be reported, so such a parameter is left unwritten and the call
/// returns [`NOT_FOUND`].
pub fn set_parameter<M: GeneratedModel + ?Sized>(model: &mut M, name: &str, value: f64) -> i32 {
    let resolved = match resolve(model, name) {
        Ok(resolved) => resolved,
        Err(_) => return NOT_FOUND,
    };
    let Some(index) = sentinel_index(resolved.address_index) else {
        warn!(
            parameter = name,
            address = resolved.address_index,
            "address index exceeds sentinel range, write skipped"
        );
        return NOT_FOUND;
    };
    match write_resolved(model, name, resolved, value) {
        Ok(_) => index,
        Err(AdapterError::UnsupportedDataType { label, .. }) => {
            debug!(parameter = name, %label, "write skipped: unsupported data type");
            index
        }
        Err(e) => {
            warn!(parameter = name, error = %e, "parameter write failed");
            NOT_FOUND
        }
    }
}

/// Sentinel form of [`try_get_parameter`]: `0.0` on any failure.
pub fn get_parameter<M: GeneratedModel + ?Sized>(model: &M, name: &str) -> f64 {
    match try_get_parameter(model, name) {
        Ok(v) => v,
        Err(AdapterError::ParameterNotFound { .. } | AdapterError::UnsupportedDataType { .. }) => {
            0.0
        }
        Err(e) => {
            warn!(parameter = name, error = %e, "parameter read failed");
            0.0
        }
    }
}

fn sentinel_index(address_index: usize) -> Option<i32> {
    i32::try_from(address_index).ok()
}
