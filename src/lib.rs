//! # Clearcut
//!
//! A query library for clear-cutting (deforestation-monitoring) records:
//! a pure filter/sort engine plus the mock data services a frontend or test
//! harness consumes instead of a real backend.
//!
//! ## Features
//!
//! - **Pure Query Engine**: filtering, stable ordering and pagination as a
//!   deterministic function of its inputs
//! - **Extensible Constraints**: ranges, set membership and geographic
//!   bounding boxes, behind one tagged union
//! - **Typed Errors**: invalid ranges and unknown attributes are rejected
//!   before evaluation, distinctly from an empty result
//! - **Record Trait**: any type exposing named attributes becomes queryable
//! - **Mock Dataset**: deterministic fixtures plus YAML-backed datasets for
//!   development and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clearcut::prelude::*;
//!
//! let service = InMemoryRecordService::with_records(mock_clear_cuts());
//!
//! let spec = FilterSpec::new()
//!     .constrain("area_hectare", Constraint::Range(Range::new(1.0, 10.0)))
//!     .constrain(
//!         "status",
//!         Constraint::OneOf { values: vec![FieldValue::from("validated")] },
//!     );
//!
//! let cuts = service.query(&spec, Some(&Sort::desc("cut_year"))).await?;
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        engine,
        error::{ClearcutError, ClearcutResult, ConfigError, DatasetError, QueryError},
        field::FieldValue,
        filter::{Constraint, FilterSpec, Range},
        geo::{BoundingBox, LatLng},
        query::{PaginatedResponse, PaginationMeta, PagingConfig, QueryParams},
        record::Record,
        service::RecordService,
        sort::{Sort, SortDirection},
    };

    // === Domain records and datasets ===
    pub use crate::data::{
        clear_cut::{ClearCut, ClearCutStatus},
        dataset::{load_from_yaml_file, load_from_yaml_str},
        mock::{FilterBounds, filter_bounds, mock_clear_cuts},
    };

    // === Storage ===
    pub use crate::storage::InMemoryRecordService;

    // === Config ===
    pub use crate::config::{ClearcutConfig, DatasetConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
