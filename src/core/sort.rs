//! Sort directives over one record attribute

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// An ordering directive: one attribute plus a direction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sort {
    /// The attribute records are ordered by
    pub attribute: String,

    /// Ascending or descending
    #[serde(default)]
    pub direction: SortDirection,
}

impl Sort {
    /// Sort ascending on an attribute
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Sort descending on an attribute
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse the `field:asc` / `field:desc` expression used in query strings
    ///
    /// A bare `field` sorts ascending. Anything other than `desc` after the
    /// colon is treated as ascending, matching the permissive handling of
    /// query-string input elsewhere. Returns `None` for an empty expression.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return None;
        }

        let (attribute, direction) = match expr.split_once(':') {
            Some((field, "desc")) => (field, SortDirection::Desc),
            Some((field, _)) => (field, SortDirection::Asc),
            None => (expr, SortDirection::Asc),
        };

        if attribute.is_empty() {
            return None;
        }

        Some(Self {
            attribute: attribute.to_string(),
            direction,
        })
    }
}
