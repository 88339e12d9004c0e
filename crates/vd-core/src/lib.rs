//! vd-core: shared foundation for the vehicle-dynamics adapter.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{VdError, VdResult};
pub use numeric::*;
pub use units::*;
