//! Error types for adapter operations.

use thiserror::Error;

/// Errors surfaced by the adapter's result-returning API.
///
/// The sentinel-returning accessors (`set_parameter`, `get_parameter`)
/// never surface these; they fold them into `-1` / `0.0`.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Parameter not found: {name}")]
    ParameterNotFound { name: String },

    #[error("Parameter {name} has unsupported data type {label}")]
    UnsupportedDataType {
        name: String,
        label: String,
        address_index: usize,
    },

    #[error(transparent)]
    Core(#[from] vd_core::VdError),

    #[error("Model error: {0}")]
    Model(#[from] vd_model::ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AdapterResult<T> = Result<T, AdapterError>;

