//! Filter specifications: the constraints a record must satisfy
//!
//! A [`FilterSpec`] maps attribute names to [`Constraint`]s. A record matches
//! the spec when it satisfies every declared constraint (logical AND); an
//! empty spec matches everything.

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::geo::BoundingBox;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An inclusive numeric interval
///
/// Both bounds are part of the interval: a value exactly equal to `min` or
/// `max` satisfies the range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Create a new range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check that the bounds are not inverted
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether a value lies inside the range (bounds included)
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A single constraint on one record attribute
///
/// The set of constraint kinds is open-ended: adding a variant here (plus its
/// arms in validation and evaluation) is all it takes to support a new kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Numeric attribute must fall within an inclusive interval
    Range(Range),

    /// Attribute value must be a member of the allowed set
    OneOf { values: Vec<FieldValue> },

    /// Coordinate attribute must lie within a geographic bounding box
    BoundingBox(BoundingBox),
}

impl Constraint {
    /// Evaluate this constraint against a single attribute value
    ///
    /// Values of an incompatible type never match; type mismatches are a
    /// filtering outcome, not an error.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Constraint::Range(range) => value.as_f64().is_some_and(|v| range.contains(v)),
            Constraint::OneOf { values } => values.iter().any(|allowed| value.matches(allowed)),
            Constraint::BoundingBox(bbox) => {
                value.as_coordinate().is_some_and(|point| bbox.contains(point))
            }
        }
    }
}

/// An ordered set of named constraints
///
/// Declaration order is preserved so that evaluating a spec (and reporting
/// the first invalid constraint) is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FilterSpec {
    constraints: IndexMap<String, Constraint>,
}

impl FilterSpec {
    /// Create an empty spec (matches every record)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint on an attribute, replacing any previous one
    pub fn constrain(mut self, attribute: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints.insert(attribute.into(), constraint);
        self
    }

    /// Parse a spec from its JSON object form
    ///
    /// ```json
    /// {
    ///   "area_hectare": {"kind": "range", "min": 0.5, "max": 10},
    ///   "status": {"kind": "one_of", "values": ["validated"]},
    ///   "location": {"kind": "bounding_box",
    ///                "sw": {"lat": 41.0, "lng": -5.0},
    ///                "ne": {"lat": 51.0, "lng": 10.0}}
    /// }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of declared constraints
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the spec declares no constraint at all
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Get the constraint declared for an attribute, if any
    pub fn get(&self, attribute: &str) -> Option<&Constraint> {
        self.constraints.get(attribute)
    }

    /// Iterate over the declared constraints in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.constraints.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_range_contains_bounds() {
        let range = Range::new(1.0, 10.0);
        assert!(range.contains(1.0));
        assert!(range.contains(10.0));
        assert!(range.contains(5.5));
        assert!(!range.contains(0.999));
        assert!(!range.contains(10.001));
    }

    #[test]
    fn test_range_well_formed() {
        assert!(Range::new(1.0, 1.0).is_well_formed());
        assert!(!Range::new(10.0, 5.0).is_well_formed());
    }

    #[test]
    fn test_range_constraint_rejects_non_numeric() {
        let constraint = Constraint::Range(Range::new(0.0, 10.0));
        assert!(constraint.matches(&FieldValue::Integer(5)));
        assert!(!constraint.matches(&FieldValue::from("five")));
        assert!(!constraint.matches(&FieldValue::Null));
    }

    #[test]
    fn test_one_of_constraint() {
        let constraint = Constraint::OneOf {
            values: vec![FieldValue::from("validated"), FieldValue::from("legal")],
        };
        assert!(constraint.matches(&FieldValue::from("validated")));
        assert!(!constraint.matches(&FieldValue::from("to_validate")));
    }

    #[test]
    fn test_bounding_box_constraint() {
        let constraint = Constraint::BoundingBox(BoundingBox::new(
            LatLng::new(11.0, 11.0),
            LatLng::new(22.0, 22.0),
        ));
        assert!(constraint.matches(&FieldValue::Coordinate(LatLng::new(15.0, 15.0))));
        assert!(!constraint.matches(&FieldValue::Coordinate(LatLng::new(25.0, 25.0))));
        assert!(!constraint.matches(&FieldValue::Float(15.0)));
    }

    #[test]
    fn test_filter_spec_builder_preserves_order() {
        let spec = FilterSpec::new()
            .constrain("cut_year", Constraint::Range(Range::new(2020.0, 2024.0)))
            .constrain(
                "status",
                Constraint::OneOf {
                    values: vec![FieldValue::from("validated")],
                },
            );

        let attributes: Vec<&str> = spec.iter().map(|(name, _)| name).collect();
        assert_eq!(attributes, vec!["cut_year", "status"]);
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_filter_spec_from_json() {
        let spec = FilterSpec::from_json_str(
            r#"{
                "area_hectare": {"kind": "range", "min": 0.5, "max": 10},
                "status": {"kind": "one_of", "values": ["validated", "legal"]},
                "location": {"kind": "bounding_box",
                             "sw": {"lat": 41.0, "lng": -5.0},
                             "ne": {"lat": 51.0, "lng": 10.0}}
            }"#,
        )
        .expect("valid filter json");

        assert_eq!(spec.len(), 3);
        assert!(matches!(
            spec.get("area_hectare"),
            Some(Constraint::Range(r)) if r.min == 0.5 && r.max == 10.0
        ));
        assert!(matches!(
            spec.get("location"),
            Some(Constraint::BoundingBox(_))
        ));
    }

    #[test]
    fn test_filter_spec_from_invalid_json() {
        let err = FilterSpec::from_json_str("{\"area\": {\"kind\": \"between\"}}").unwrap_err();
        assert!(matches!(err, QueryError::InvalidFilter { .. }));
    }

    #[test]
    fn test_empty_spec() {
        let spec = FilterSpec::new();
        assert!(spec.is_empty());
        assert_eq!(spec.get("anything"), None);
    }
}
