//! Service trait for record access
//!
//! The service is the data-access collaborator: it owns the record
//! collection and delegates filtering and ordering to the pure query engine,
//! so the engine itself stays testable without any storage in place.

use crate::core::Record;
use crate::core::filter::FilterSpec;
use crate::core::query::{PaginatedResponse, PagingConfig, QueryParams};
use crate::core::sort::Sort;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for querying records of one type
///
/// Implementations supply the record collection. The library is agnostic to
/// where it comes from: an in-memory mock dataset, a file, or a real backend.
#[async_trait]
pub trait RecordService<T: Record>: Send + Sync {
    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all records in their stored order
    async fn list(&self) -> Result<Vec<T>>;

    /// Filter and order the collection
    ///
    /// Must apply the same semantics as [`crate::core::engine::query`]:
    /// validation first, AND over constraints, stable ordering.
    async fn query(&self, spec: &FilterSpec, sort: Option<&Sort>) -> Result<Vec<T>>;

    /// Run a query described by raw query parameters and slice one page
    ///
    /// Uses the default paging limits; configurations are applied through
    /// [`RecordService::query_page_with`].
    async fn query_page(&self, params: &QueryParams) -> Result<PaginatedResponse<T>> {
        self.query_page_with(params, &PagingConfig::default()).await
    }

    /// Like [`RecordService::query_page`], with explicit paging limits
    async fn query_page_with(
        &self,
        params: &QueryParams,
        paging: &PagingConfig,
    ) -> Result<PaginatedResponse<T>> {
        let spec = params.filter_spec()?;
        let sort = params.sort();
        let results = self.query(&spec, sort.as_ref()).await?;
        Ok(PaginatedResponse::paginate(
            results,
            params.page(),
            params.limit(paging),
        ))
    }
}
