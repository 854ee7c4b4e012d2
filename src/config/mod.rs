//! Configuration loading and management

use crate::core::error::{ClearcutResult, ConfigError};
use crate::data::clear_cut::ClearCut;
use crate::data::{dataset, mock};
use serde::{Deserialize, Serialize};

pub use crate::core::query::PagingConfig;

/// Where the record collection comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DatasetConfig {
    /// The built-in deterministic mock dataset
    #[default]
    Mock,

    /// A YAML file holding a sequence of records
    File { path: String },
}

/// Complete configuration for the clearcut library
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClearcutConfig {
    /// Paging defaults
    pub paging: PagingConfig,

    /// Dataset source
    pub dataset: DatasetConfig,
}

impl ClearcutConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ClearcutResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ClearcutResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paging.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.paging.max_limit < self.paging.default_limit {
            return Err(ConfigError::InvalidValue {
                field: "paging.max_limit".to_string(),
                message: "must not be smaller than default_limit".to_string(),
            });
        }
        Ok(())
    }

    /// Load the record collection named by the dataset source
    pub fn load_records(&self) -> ClearcutResult<Vec<ClearCut>> {
        match &self.dataset {
            DatasetConfig::Mock => Ok(mock::mock_clear_cuts()),
            DatasetConfig::File { path } => Ok(dataset::load_from_yaml_file(path)?),
        }
    }
}
