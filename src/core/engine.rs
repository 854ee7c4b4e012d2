//! The query engine: filtering and ordering over record collections
//!
//! [`query`] is a pure function: it holds no state, performs no I/O and
//! touches nothing beyond its inputs, so two calls with the same inputs
//! always produce the same output ordering.

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::filter::FilterSpec;
use crate::core::record::Record;
use crate::core::sort::{Sort, SortDirection};
use crate::core::validation::{validate_filter_spec, validate_sort};
use std::cmp::Ordering;

/// Filter and order a record collection
///
/// The spec and sort are validated as a whole before any record is touched;
/// a malformed query fails without producing a partial result. Records that
/// satisfy every declared constraint are then ordered by the sort attribute
/// (stable, so equal keys keep their relative input order). Without a sort
/// the input order is preserved.
///
/// An empty result is a successful outcome, never an error.
pub fn query<R: Record>(
    records: Vec<R>,
    spec: &FilterSpec,
    sort: Option<&Sort>,
) -> Result<Vec<R>, QueryError> {
    validate_filter_spec::<R>(spec)?;
    if let Some(sort) = sort {
        validate_sort::<R>(sort)?;
    }

    let mut matching: Vec<R> = records
        .into_iter()
        .filter(|record| matches_spec(record, spec))
        .collect();

    if let Some(sort) = sort {
        sort_records(&mut matching, sort);
    }

    Ok(matching)
}

/// Check whether a record satisfies every constraint of a validated spec
fn matches_spec<R: Record>(record: &R, spec: &FilterSpec) -> bool {
    spec.iter().all(|(attribute, constraint)| {
        record
            .field_value(attribute)
            .is_some_and(|value| constraint.matches(&value))
    })
}

/// Stable in-place sort by one attribute
///
/// Missing or mutually incomparable values compare as equal, so the affected
/// records simply keep their relative input order.
fn sort_records<R: Record>(records: &mut [R], sort: &Sort) {
    records.sort_by(|a, b| {
        let ordering = compare_by_attribute(a, b, &sort.attribute);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_attribute<R: Record>(a: &R, b: &R, attribute: &str) -> Ordering {
    let left = a.field_value(attribute).unwrap_or(FieldValue::Null);
    let right = b.field_value(attribute).unwrap_or(FieldValue::Null);
    left.compare(&right).unwrap_or(Ordering::Equal)
}
