//! Error types for model metadata and storage.

use thiserror::Error;

/// Errors raised while building or addressing a model's data maps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Address index {index} out of range (address map holds {len} slots)")]
    AddressOob { index: usize, len: usize },

    #[error("Data type index {index} out of range (data type table holds {len} entries)")]
    DataTypeOob { index: usize, len: usize },

    #[error("Slot {index} is {width} bytes wide, {required} required")]
    SlotTooNarrow {
        index: usize,
        width: usize,
        required: usize,
    },

    #[error("Initialization failed: {message}")]
    Initialization { message: String },
}

pub type ModelResult<T> = Result<T, ModelError>;

