//! GeneratedModel trait for externally generated, fixed-step models.

use std::fmt;

use crate::address::DataAddressMap;
use crate::error::ModelResult;
use crate::mapping::ModelMappingInfo;
use crate::signals::{ExternalInputs, ExternalOutputs};

/// Static description of a model build.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelInfo {
    pub name: String,
    /// Fixed base-rate step size (seconds)
    pub fixed_step_s: f64,
}

/// Error status recorded on the model instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorStatus {
    /// A step was requested while the previous one was still in flight.
    Overrun,
    /// Any other status reported by the generated code.
    Other(String),
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Overrun => write!(f, "Overrun"),
            ErrorStatus::Other(msg) => write!(f, "{msg}"),
        }
    }
}

/// Trait for an opaque generated model instance.
///
/// The integrator behind `step` is a black box. The adapter only relies on:
/// - one-time `initialize` / `terminate`
/// - `step`, advancing exactly one fixed base-rate step
/// - the mapping tables and the address map they index into
/// - the fixed input/output signal structs
/// - an error status slot
pub trait GeneratedModel {
    fn model_info(&self) -> &ModelInfo;

    /// One-time initialization, run before the first step.
    fn initialize(&mut self) -> ModelResult<()>;

    /// Advance one fixed timestep.
    fn step(&mut self);

    /// One-time cleanup.
    fn terminate(&mut self);

    fn mapping_info(&self) -> &ModelMappingInfo;

    fn data_address_map(&self) -> &DataAddressMap;

    fn data_address_map_mut(&mut self) -> &mut DataAddressMap;

    fn inputs(&self) -> &ExternalInputs;

    fn inputs_mut(&mut self) -> &mut ExternalInputs;

    fn outputs(&self) -> &ExternalOutputs;

    fn error_status(&self) -> Option<&ErrorStatus>;

    fn set_error_status(&mut self, status: ErrorStatus);
}
