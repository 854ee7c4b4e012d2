//! Loading record datasets from YAML files

use crate::core::error::DatasetError;
use crate::data::clear_cut::ClearCut;

/// Load a clear-cutting dataset from a YAML file
///
/// The file holds a YAML sequence of records in the serde representation of
/// [`ClearCut`]. Stored order is preserved: it is the "input order" queries
/// fall back to when no sort is requested.
pub fn load_from_yaml_file(path: &str) -> Result<Vec<ClearCut>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    load_from_yaml_str(&content).map_err(|e| match e {
        DatasetError::Parse { message, .. } => DatasetError::Parse {
            path: path.to_string(),
            message,
        },
        other => other,
    })
}

/// Load a clear-cutting dataset from a YAML string
pub fn load_from_yaml_str(yaml: &str) -> Result<Vec<ClearCut>, DatasetError> {
    serde_yaml::from_str(yaml).map_err(|e| DatasetError::Parse {
        path: "<inline>".to_string(),
        message: e.to_string(),
    })
}
