//! Parameter files: named overrides loaded from YAML or JSON.
//!
//! ```yaml
//! parameters:
//!   m_Vehicle_kg: 1250.0
//!   switch_TireModel: 0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vd_core::ensure_finite;
use vd_model::GeneratedModel;

use crate::error::{AdapterError, AdapterResult};
use crate::wrapper::DoubleTrackModelWrapper;

/// Named parameter values, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterFile {
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl ParameterFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn from_yaml_str(content: &str) -> AdapterResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> AdapterResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_yaml(path: &Path) -> AdapterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn load_json(path: &Path) -> AdapterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load by extension: `.json` as JSON, anything else as YAML.
    pub fn load(path: &Path) -> AdapterResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_yaml(path),
        }
    }

    pub fn save_yaml(&self, path: &Path) -> AdapterResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// JSON has no NaN or infinity, so non-finite values are rejected
    /// before anything is written. YAML keeps them as `.nan` / `.inf`.
    pub fn save_json(&self, path: &Path) -> AdapterResult<()> {
        for (name, &value) in &self.parameters {
            if let Err(e) = ensure_finite(value, "parameter value") {
                warn!(parameter = %name, value, "non-finite parameter cannot be saved as JSON");
                return Err(e.into());
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// What happened to each entry of an applied parameter file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplyReport {
    /// `(name, value as stored)`
    pub applied: Vec<(String, f64)>,
    pub not_found: Vec<String>,
    pub unsupported: Vec<String>,
}

impl ApplyReport {
    /// True if every entry was written.
    pub fn is_complete(&self) -> bool {
        self.not_found.is_empty() && self.unsupported.is_empty()
    }
}

/// Write every entry of `file` into the model.
///
/// Unknown or unsupported names are reported and skipped. Storage errors
/// abort and are returned.
pub fn apply_parameters<M: GeneratedModel>(
    dtm: &mut DoubleTrackModelWrapper<M>,
    file: &ParameterFile,
) -> AdapterResult<ApplyReport> {
    let mut report = ApplyReport::default();
    for (name, &value) in &file.parameters {
        match dtm.try_set_parameter(name, value) {
            Ok(write) => report.applied.push((name.clone(), write.stored)),
            Err(AdapterError::ParameterNotFound { .. }) => {
                warn!(parameter = %name, "unknown parameter in parameter file");
                report.not_found.push(name.clone());
            }
            Err(AdapterError::UnsupportedDataType { label, .. }) => {
                warn!(parameter = %name, %label, "parameter has unsupported data type");
                report.unsupported.push(name.clone());
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        applied = report.applied.len(),
        not_found = report.not_found.len(),
        unsupported = report.unsupported.len(),
        "parameter file applied"
    );
    Ok(report)
}

/// Read the current values of `names` into a parameter file.
///
/// Names that cannot be read are skipped.
pub fn capture_parameters<'n, M: GeneratedModel>(
    dtm: &DoubleTrackModelWrapper<M>,
    names: impl IntoIterator<Item = &'n str>,
) -> ParameterFile {
    let parameters = names
        .into_iter()
        .filter_map(|name| {
            dtm.try_get_parameter(name)
                .ok()
                .map(|v| (name.to_string(), v))
        })
        .collect();
    ParameterFile { parameters }
}
