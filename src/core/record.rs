//! Record trait defining the core abstraction for queryable data types

use crate::core::field::FieldValue;
use uuid::Uuid;

/// Base trait for every record the query engine can operate on.
///
/// A record is an immutable snapshot of a domain entity. It exposes:
/// - id: Unique identifier
/// - schema: the static list of attribute names
/// - field_value: dynamic access to attribute values
///
/// The engine never touches the concrete struct directly; constraints and
/// sorts are evaluated over [`FieldValue`]s, so new record types only need to
/// implement this trait to become queryable.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used by API consumers (e.g., "clear-cuts")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// The attribute names this record type exposes
    fn schema() -> &'static [&'static str];

    /// Get the value of a specific attribute by name
    ///
    /// Returns `None` when the attribute is not part of the schema. A present
    /// attribute with no value is `Some(FieldValue::Null)`.
    fn field_value(&self, attribute: &str) -> Option<FieldValue>;

    /// Check whether an attribute is part of the schema
    fn has_attribute(attribute: &str) -> bool {
        Self::schema().contains(&attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Plot {
        id: Uuid,
        area: f64,
    }

    impl Record for Plot {
        fn resource_name() -> &'static str {
            "plots"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn schema() -> &'static [&'static str] {
            &["id", "area"]
        }

        fn field_value(&self, attribute: &str) -> Option<FieldValue> {
            match attribute {
                "id" => Some(FieldValue::Uuid(self.id)),
                "area" => Some(FieldValue::Float(self.area)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_has_attribute() {
        assert!(Plot::has_attribute("area"));
        assert!(!Plot::has_attribute("slope"));
    }

    #[test]
    fn test_field_value_lookup() {
        let plot = Plot {
            id: Uuid::new_v4(),
            area: 4.2,
        };
        assert_eq!(plot.field_value("area"), Some(FieldValue::Float(4.2)));
        assert_eq!(plot.field_value("slope"), None);
    }
}
