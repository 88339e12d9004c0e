//! Host adapter around a generated double-track vehicle model.
//!
//! The adapter owns one model instance and provides:
//! - name-based parameter access (resolver + typed accessor)
//! - fixed input/output signal accessors
//! - a fixed-step `step()` with overrun protection
//! - parameter files (YAML/JSON) and typed state snapshots
//!
//! # Example
//!
//! ```
//! use vd_adapter::DoubleTrackModelWrapper;
//! use vd_model::LoopbackModel;
//!
//! let mut dtm = DoubleTrackModelWrapper::new(LoopbackModel::new().unwrap()).unwrap();
//! dtm.set_drive_torque(&[10.0, 10.0, 20.0, 20.0]);
//! dtm.step();
//! assert_eq!(dtm.drive_torque_rl_nm(), 20.0);
//!
//! assert_eq!(dtm.set_parameter("m_Vehicle_kg", 1250.0), 0);
//! assert_eq!(dtm.get_parameter("m_Vehicle_kg"), 1250.0);
//! assert_eq!(dtm.set_parameter("doesNotExist", 5.0), -1);
//! ```

pub mod accessor;
pub mod error;
pub mod overrun;
pub mod params;
pub mod resolver;
pub mod signals;
pub mod snapshot;
pub mod wrapper;

pub use accessor::ParameterWrite;
pub use error::{AdapterError, AdapterResult};
pub use overrun::{OverrunGuard, StepState, StepToken};
pub use params::{ApplyReport, ParameterFile, apply_parameters, capture_parameters};
pub use resolver::{NOT_FOUND, ParameterKind, ParameterResolver, ResolvedParameter};
pub use snapshot::{ExternalLoad, VehicleStateSnapshot};
pub use wrapper::{DoubleTrackModelWrapper, MAX_RUN_STEPS, StepOutcome};
