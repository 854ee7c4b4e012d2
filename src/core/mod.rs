//! Core module containing the query engine and its supporting types

pub mod engine;
pub mod error;
pub mod field;
pub mod filter;
pub mod geo;
pub mod query;
pub mod record;
pub mod service;
pub mod sort;
pub mod validation;

pub use error::{ClearcutError, ClearcutResult, ConfigError, DatasetError, QueryError};
pub use field::FieldValue;
pub use filter::{Constraint, FilterSpec, Range};
pub use geo::{BoundingBox, LatLng};
pub use query::{PaginatedResponse, PaginationMeta, PagingConfig, QueryParams};
pub use record::Record;
pub use service::RecordService;
pub use sort::{Sort, SortDirection};
