//! Query parameters and pagination utilities

use crate::core::error::QueryError;
use crate::core::filter::FilterSpec;
use crate::core::sort::Sort;
use serde::{Deserialize, Serialize};

/// Paging defaults applied to queries
///
/// Callers that load a configuration pass its paging section through
/// [`crate::core::service::RecordService::query_page_with`]; everything else
/// gets these defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when the caller does not specify one
    pub default_limit: usize,

    /// Largest page size a caller may request
    pub max_limit: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Query parameters for pagination, filtering and sorting
///
/// This structure carries the raw parameters a UI or test harness would send
/// in a URL query string. All parameters have sensible defaults; the typed
/// filter spec and sort are extracted with [`QueryParams::filter_spec`] and
/// [`QueryParams::sort`].
///
/// # Example
/// ```rust,ignore
/// // GET /clear-cuts?page=2&limit=10
/// // GET /clear-cuts?filter={"status":{"kind":"one_of","values":["validated"]}}
/// // GET /clear-cuts?filter={"area_hectare":{"kind":"range","min":0.5,"max":10}}&sort=cut_year:desc
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page; absent means the configured default
    pub limit: Option<usize>,

    /// Filter spec as a JSON object (attribute name -> constraint)
    pub filter: Option<String>,

    /// Sort field and direction (`field:asc`, `field:desc` or bare `field`)
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, falling back to the configured default and clamped to the
    /// configured maximum
    pub fn limit(&self, paging: &PagingConfig) -> usize {
        self.limit
            .unwrap_or(paging.default_limit)
            .clamp(1, paging.max_limit.max(1))
    }

    /// Parse the filter parameter into a typed spec
    ///
    /// An absent filter parameter is an empty spec, not an error.
    pub fn filter_spec(&self) -> Result<FilterSpec, QueryError> {
        match &self.filter {
            Some(json) => FilterSpec::from_json_str(json),
            None => Ok(FilterSpec::new()),
        }
    }

    /// Parse the sort parameter, if any
    pub fn sort(&self) -> Option<Sort> {
        self.sort.as_deref().and_then(Sort::parse)
    }
}

/// Paginated response structure
///
/// This structure wraps one page of query results with metadata about
/// pagination state.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The records of the current page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Slice one page out of a full result set
    pub fn paginate(results: Vec<T>, page: usize, limit: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total = results.len();
        // Saturating: an absurd page number is simply past the end
        let start = (page - 1).saturating_mul(limit);

        let data = if start >= total {
            Vec::new()
        } else {
            results
                .into_iter()
                .skip(start)
                .take(limit)
                .collect()
        };

        Self {
            data,
            pagination: PaginationMeta::new(page, limit, total),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
