//! Name-to-address resolution over a model's parameter table.
//!
//! Resolution is a linear scan in declaration order; the first entry whose
//! name matches exactly wins, even if later entries reuse the name.

use vd_model::{BOOLEAN_T, ModelMappingInfo, ParameterEntry, REAL_T};

/// Sentinel returned by the index-based lookups when a name is absent.
pub const NOT_FOUND: i32 = -1;

/// Storage representation of a resolved parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// `real_T`: an `f64` slot.
    Real,
    /// `boolean_T`: a single unsigned byte.
    Boolean,
    /// Any other type label; not accessible by name.
    Unsupported { label: String },
}

impl ParameterKind {
    /// Classify a generated-code type label.
    pub fn from_label(label: &str) -> Self {
        match label {
            REAL_T => Self::Real,
            BOOLEAN_T => Self::Boolean,
            other => Self::Unsupported {
                label: other.to_string(),
            },
        }
    }
}

/// A parameter located by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedParameter {
    /// Position of the matching entry in the parameter table.
    pub entry_index: usize,
    pub address_index: usize,
    pub data_type_index: usize,
    pub kind: ParameterKind,
}

/// Read-only view that resolves parameter names against a mapping table.
#[derive(Clone, Copy, Debug)]
pub struct ParameterResolver<'a> {
    mapping: &'a ModelMappingInfo,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(mapping: &'a ModelMappingInfo) -> Self {
        Self { mapping }
    }

    /// First entry named `name`, with its table position.
    pub fn find_entry(&self, name: &str) -> Option<(usize, &'a ParameterEntry)> {
        self.mapping
            .parameters()
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == name)
    }

    /// Address index of the first entry named `name`, or [`NOT_FOUND`].
    pub fn find_parameter_address_index(&self, name: &str) -> i32 {
        self.find_entry(name)
            .and_then(|(_, entry)| i32::try_from(entry.address_index).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Data-type index of the first entry named `name`, or [`NOT_FOUND`].
    pub fn find_parameter_data_type(&self, name: &str) -> i32 {
        self.find_entry(name)
            .and_then(|(_, entry)| i32::try_from(entry.data_type_index).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Resolve `name` to its slot and storage kind in one scan.
    pub fn resolve(&self, name: &str) -> Option<ResolvedParameter> {
        let (entry_index, entry) = self.find_entry(name)?;
        let kind = match self.mapping.data_type(entry.data_type_index) {
            Some(dt) => ParameterKind::from_label(&dt.name),
            // Tables are validated at build time; keep lookups total anyway.
            None => ParameterKind::Unsupported {
                label: String::new(),
            },
        };
        Some(ResolvedParameter {
            entry_index,
            address_index: entry.address_index,
            data_type_index: entry.data_type_index,
            kind,
        })
    }

    /// Names in declaration order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.mapping.parameters().iter().map(|p| p.name.as_str())
    }
}
