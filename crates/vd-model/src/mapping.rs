//! Model mapping info: the static parameter and data-type tables.
//!
//! The tables are produced once when the model is constructed and are
//! read-only afterwards. Parameter names are not required to be unique;
//! lookups resolve to the first entry in declaration order.

use crate::address::DataAddressMap;
use crate::error::{ModelError, ModelResult};

/// Type label used by generated code for double-precision parameters.
pub const REAL_T: &str = "real_T";
/// Type label used by generated code for boolean (byte-wide) parameters.
pub const BOOLEAN_T: &str = "boolean_T";

/// One row of the data-type table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataTypeInfo {
    /// Generated-code type label, e.g. `real_T`.
    pub name: String,
    /// Storage width in bytes.
    pub size: usize,
}

/// One row of the parameter table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterEntry {
    pub name: String,
    pub data_type_index: usize,
    pub address_index: usize,
}

/// Immutable parameter + data-type tables of a model instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelMappingInfo {
    parameters: Vec<ParameterEntry>,
    data_types: Vec<DataTypeInfo>,
}

impl ModelMappingInfo {
    /// Parameter table in declaration order.
    pub fn parameters(&self) -> &[ParameterEntry] {
        &self.parameters
    }

    /// Data-type table.
    pub fn data_types(&self) -> &[DataTypeInfo] {
        &self.data_types
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    pub fn data_type(&self, index: usize) -> Option<&DataTypeInfo> {
        self.data_types.get(index)
    }
}

/// Builder for a model's mapping info and its backing address map.
///
/// Register data types with `add_data_type`, declare parameters with
/// `add_parameter`, then call `build()` to validate and freeze the tables.
#[derive(Debug, Default)]
pub struct MappingBuilder {
    parameters: Vec<ParameterEntry>,
    data_types: Vec<DataTypeInfo>,
    addresses: DataAddressMap,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a data type and return its index.
    pub fn add_data_type(&mut self, name: impl Into<String>, size: usize) -> usize {
        self.data_types.push(DataTypeInfo {
            name: name.into(),
            size,
        });
        self.data_types.len() - 1
    }

    /// Declare a parameter backed by a fresh zeroed slot.
    ///
    /// Returns the address index of the new slot.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        data_type_index: usize,
    ) -> ModelResult<usize> {
        let size = self
            .data_types
            .get(data_type_index)
            .map(|dt| dt.size)
            .ok_or(ModelError::DataTypeOob {
                index: data_type_index,
                len: self.data_types.len(),
            })?;
        let address_index = self.addresses.allocate(size);
        self.add_parameter_at(name, data_type_index, address_index)?;
        Ok(address_index)
    }

    /// Declare a parameter that aliases an existing slot.
    pub fn add_parameter_at(
        &mut self,
        name: impl Into<String>,
        data_type_index: usize,
        address_index: usize,
    ) -> ModelResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidArg {
                what: "parameter name must not be empty",
            });
        }
        self.parameters.push(ParameterEntry {
            name,
            data_type_index,
            address_index,
        });
        Ok(())
    }

    /// Mutable access to the backing slots, for writing default values
    /// before the tables are frozen.
    pub fn addresses_mut(&mut self) -> &mut DataAddressMap {
        &mut self.addresses
    }

    /// Validate and freeze the tables.
    pub fn build(self) -> ModelResult<(ModelMappingInfo, DataAddressMap)> {
        for entry in &self.parameters {
            let dt = self
                .data_types
                .get(entry.data_type_index)
                .ok_or(ModelError::DataTypeOob {
                    index: entry.data_type_index,
                    len: self.data_types.len(),
                })?;
            let width = self.addresses.slot(entry.address_index)?.len();
            if width < dt.size {
                return Err(ModelError::SlotTooNarrow {
                    index: entry.address_index,
                    width,
                    required: dt.size,
                });
            }
        }

        Ok((
            ModelMappingInfo {
                parameters: self.parameters,
                data_types: self.data_types,
            },
            self.addresses,
        ))
    }
}
