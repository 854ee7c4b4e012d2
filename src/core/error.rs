//! Typed error handling for the clearcut library
//!
//! Callers must be able to tell a failed query apart from an empty one, so
//! every failure mode gets its own variant instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`QueryError`]: invalid filter specifications and unknown attributes
//! - [`DatasetError`]: failures while loading a record dataset
//! - [`ConfigError`]: configuration parsing and validation failures
//!
//! # Example
//!
//! ```rust,ignore
//! use clearcut::prelude::*;
//!
//! match engine::query(records, &spec, None) {
//!     Ok(matching) => println!("{} records", matching.len()),
//!     Err(QueryError::InvalidRange { attribute, .. }) => {
//!         eprintln!("bad range on {}", attribute);
//!     }
//!     Err(e) => eprintln!("query failed: {}", e),
//! }
//! ```

use std::fmt;

/// The main error type for the clearcut library
#[derive(Debug)]
pub enum ClearcutError {
    /// Query evaluation errors (bad constraints, unknown attributes)
    Query(QueryError),

    /// Dataset loading errors
    Dataset(DatasetError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ClearcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearcutError::Query(e) => write!(f, "{}", e),
            ClearcutError::Dataset(e) => write!(f, "{}", e),
            ClearcutError::Config(e) => write!(f, "{}", e),
            ClearcutError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ClearcutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClearcutError::Query(e) => Some(e),
            ClearcutError::Dataset(e) => Some(e),
            ClearcutError::Config(e) => Some(e),
            ClearcutError::Internal(_) => None,
        }
    }
}

impl ClearcutError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ClearcutError::Query(e) => e.error_code(),
            ClearcutError::Dataset(e) => e.error_code(),
            ClearcutError::Config(_) => "CONFIG_ERROR",
            ClearcutError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised while validating or evaluating a query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A range constraint has its bounds inverted
    InvalidRange {
        attribute: String,
        min: f64,
        max: f64,
    },

    /// A bounding-box constraint has its corners inverted
    InvalidBoundingBox {
        attribute: String,
    },

    /// A filter or sort references an attribute the record schema does not have
    UnknownAttribute {
        attribute: String,
    },

    /// The filter expression could not be parsed
    InvalidFilter {
        message: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidRange {
                attribute,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid range for attribute '{}': min {} exceeds max {}",
                    attribute, min, max
                )
            }
            QueryError::InvalidBoundingBox { attribute } => {
                write!(
                    f,
                    "Invalid bounding box for attribute '{}': corners are inverted",
                    attribute
                )
            }
            QueryError::UnknownAttribute { attribute } => {
                write!(f, "Unknown attribute: '{}'", attribute)
            }
            QueryError::InvalidFilter { message } => {
                write!(f, "Invalid filter expression: {}", message)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidRange { .. } => "INVALID_RANGE",
            QueryError::InvalidBoundingBox { .. } => "INVALID_BOUNDING_BOX",
            QueryError::UnknownAttribute { .. } => "UNKNOWN_ATTRIBUTE",
            QueryError::InvalidFilter { .. } => "INVALID_FILTER",
        }
    }
}

impl From<QueryError> for ClearcutError {
    fn from(err: QueryError) -> Self {
        ClearcutError::Query(err)
    }
}

// =============================================================================
// Dataset Errors
// =============================================================================

/// Errors raised while loading a record dataset
#[derive(Debug)]
pub enum DatasetError {
    /// IO error while reading a dataset file
    Io {
        path: String,
        message: String,
    },

    /// Dataset file could not be parsed
    Parse {
        path: String,
        message: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, message } => {
                write!(f, "Failed to read dataset '{}': {}", path, message)
            }
            DatasetError::Parse { path, message } => {
                write!(f, "Failed to parse dataset '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl DatasetError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DatasetError::Io { .. } => "DATASET_IO_ERROR",
            DatasetError::Parse { .. } => "DATASET_PARSE_ERROR",
        }
    }
}

impl From<DatasetError> for ClearcutError {
    fn from(err: DatasetError) -> Self {
        ClearcutError::Dataset(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid value for field '{}': {}", field, message)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ClearcutError {
    fn from(err: ConfigError) -> Self {
        ClearcutError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::InvalidFilter {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClearcutError {
    fn from(err: serde_json::Error) -> Self {
        ClearcutError::Query(QueryError::from(err))
    }
}

impl From<serde_yaml::Error> for ClearcutError {
    fn from(err: serde_yaml::Error) -> Self {
        ClearcutError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ClearcutError {
    fn from(err: std::io::Error) -> Self {
        ClearcutError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for clearcut operations
pub type ClearcutResult<T> = Result<T, ClearcutError>;

// =============================================================================
// Tests
// =============================================================================
