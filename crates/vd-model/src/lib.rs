//! Opaque model seam for generated double-track vehicle models.
//!
//! Provides:
//! - `GeneratedModel`: initialize / step / terminate plus the model's metadata
//! - Model mapping info (parameter table, data-type table) and its builder
//! - `DataAddressMap`: byte-addressed parameter storage
//! - Fixed input/output signal structs
//! - `LoopbackModel`: reference model that echoes inputs to outputs

pub mod address;
pub mod error;
pub mod loopback;
pub mod mapping;
pub mod model;
pub mod signals;

pub use address::DataAddressMap;
pub use error::{ModelError, ModelResult};
pub use loopback::LoopbackModel;
pub use mapping::{
    BOOLEAN_T, DataTypeInfo, MappingBuilder, ModelMappingInfo, ParameterEntry, REAL_T,
};
pub use model::{ErrorStatus, GeneratedModel, ModelInfo};
pub use signals::{ExternalInputs, ExternalOutputs, SimRealState, Wheel};
