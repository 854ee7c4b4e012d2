//! Polymorphic attribute values and their ordering semantics

use crate::core::geo::LatLng;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic attribute value that can hold different types
///
/// Records expose their attributes through this type so that constraints and
/// sorts can be evaluated without knowing the concrete record struct.
///
/// Serialization is untagged, so a JSON string always deserializes as
/// [`FieldValue::String`], even when it spells a uuid or an RFC 3339
/// timestamp. [`FieldValue::matches`] coerces those string forms, which is
/// what lets a JSON `one_of` filter match `Uuid` and `DateTime` attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Coordinate(LatLng),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, converting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a coordinate if possible
    pub fn as_coordinate(&self) -> Option<&LatLng> {
        match self {
            FieldValue::Coordinate(c) => Some(c),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare two values of compatible types
    ///
    /// Numbers compare across the `Integer`/`Float` divide via
    /// `f64::total_cmp`. Incompatible pairs (and coordinates, which carry no
    /// natural order) return `None`.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => Some(a.cmp(b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => Some(a.total_cmp(&b)),
                _ => None,
            },
        }
    }

    /// Loose equality used by set-membership constraints
    ///
    /// Uuids and datetimes also match their string forms, since untagged
    /// deserialization turns both into [`FieldValue::String`]. Everything
    /// else without a defined ordering falls back to strict equality, so
    /// coordinates still compare field-by-field.
    pub fn matches(&self, other: &FieldValue) -> bool {
        match self.compare(other) {
            Some(ordering) => ordering == Ordering::Equal,
            None => match (self, other) {
                (FieldValue::Uuid(id), FieldValue::String(s))
                | (FieldValue::String(s), FieldValue::Uuid(id)) => {
                    Uuid::parse_str(s).is_ok_and(|parsed| parsed == *id)
                }
                (FieldValue::DateTime(ts), FieldValue::String(s))
                | (FieldValue::String(s), FieldValue::DateTime(ts)) => {
                    DateTime::parse_from_rfc3339(s)
                        .is_ok_and(|parsed| parsed.with_timezone(&Utc) == *ts)
                }
                _ => self == other,
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_f64(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numeric_coercion() {
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(3.5).as_f64(), Some(3.5));
        assert_eq!(FieldValue::Boolean(true).as_f64(), None);
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_compare_cross_numeric() {
        let a = FieldValue::Integer(5);
        let b = FieldValue::Float(5.0);
        assert_eq!(a.compare(&b), Some(Ordering::Equal));

        let c = FieldValue::Float(4.5);
        assert_eq!(a.compare(&c), Some(Ordering::Greater));
        assert_eq!(c.compare(&a), Some(Ordering::Less));
    }

    #[test]
    fn test_compare_strings() {
        let a = FieldValue::from("abies");
        let b = FieldValue::from("picea");
        assert_eq!(a.compare(&b), Some(Ordering::Less));
    }

    #[test]
    fn test_compare_incompatible_types() {
        let a = FieldValue::from("abies");
        let b = FieldValue::Integer(3);
        assert_eq!(a.compare(&b), None);
    }

    #[test]
    fn test_matches_loose_equality() {
        assert!(FieldValue::Integer(7).matches(&FieldValue::Float(7.0)));
        assert!(!FieldValue::Integer(7).matches(&FieldValue::Float(7.5)));

        let point = FieldValue::Coordinate(LatLng::new(45.0, 3.0));
        assert!(point.matches(&FieldValue::Coordinate(LatLng::new(45.0, 3.0))));
        assert!(!point.matches(&FieldValue::Coordinate(LatLng::new(45.0, 4.0))));
    }

    #[test]
    fn test_matches_uuid_string_form() {
        let id = Uuid::parse_str("0191e9cd-0001-7000-8000-000000000001").unwrap();
        let value = FieldValue::Uuid(id);

        assert!(value.matches(&FieldValue::from("0191e9cd-0001-7000-8000-000000000001")));
        assert!(FieldValue::from("0191e9cd-0001-7000-8000-000000000001").matches(&value));
        assert!(!value.matches(&FieldValue::from("0191e9cd-0002-7000-8000-000000000002")));
        assert!(!value.matches(&FieldValue::from("not a uuid")));
    }

    #[test]
    fn test_matches_datetime_string_form() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = FieldValue::DateTime(ts);

        assert!(value.matches(&FieldValue::from("2024-03-01T12:00:00Z")));
        // Same instant in another offset still matches
        assert!(value.matches(&FieldValue::from("2024-03-01T13:00:00+01:00")));
        assert!(!value.matches(&FieldValue::from("2024-03-01T12:00:01Z")));
        assert!(!value.matches(&FieldValue::from("not a timestamp")));
    }

    #[test]
    fn test_serde_roundtrip() {
        for original in [
            FieldValue::String("hello".to_string()),
            FieldValue::Integer(42),
            FieldValue::Float(2.718),
            FieldValue::Boolean(false),
            FieldValue::Coordinate(LatLng::new(44.5, 2.25)),
            FieldValue::Null,
        ] {
            let json = serde_json::to_string(&original).expect("serialize should succeed");
            let restored: FieldValue =
                serde_json::from_str(&json).expect("deserialize should succeed");
            assert_eq!(original, restored);
        }
    }
}
