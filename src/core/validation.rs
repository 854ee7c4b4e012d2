//! Boundary validation for filter specs and sorts
//!
//! Validation runs before any record is evaluated, so a malformed query is
//! rejected as a whole and never produces a partial result.

use crate::core::error::QueryError;
use crate::core::filter::{Constraint, FilterSpec};
use crate::core::record::Record;
use crate::core::sort::Sort;

/// Validate a filter spec against a record schema
///
/// Checks, in declaration order:
/// - every constrained attribute exists in the schema of `R`
/// - every range has `min <= max`
/// - every bounding box has non-inverted corners
pub fn validate_filter_spec<R: Record>(spec: &FilterSpec) -> Result<(), QueryError> {
    for (attribute, constraint) in spec.iter() {
        if !R::has_attribute(attribute) {
            return Err(QueryError::UnknownAttribute {
                attribute: attribute.to_string(),
            });
        }

        match constraint {
            Constraint::Range(range) if !range.is_well_formed() => {
                return Err(QueryError::InvalidRange {
                    attribute: attribute.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
            Constraint::BoundingBox(bbox) if !bbox.is_well_formed() => {
                return Err(QueryError::InvalidBoundingBox {
                    attribute: attribute.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Validate that a sort references an attribute of the record schema
pub fn validate_sort<R: Record>(sort: &Sort) -> Result<(), QueryError> {
    if !R::has_attribute(&sort.attribute) {
        return Err(QueryError::UnknownAttribute {
            attribute: sort.attribute.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::filter::Range;
    use crate::core::geo::{BoundingBox, LatLng};
    use uuid::Uuid;

    #[derive(Clone, Debug)]
    struct Stand {
        id: Uuid,
    }

    impl Record for Stand {
        fn resource_name() -> &'static str {
            "stands"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn schema() -> &'static [&'static str] {
            &["id", "area", "location"]
        }

        fn field_value(&self, attribute: &str) -> Option<FieldValue> {
            match attribute {
                "id" => Some(FieldValue::Uuid(self.id)),
                "area" => Some(FieldValue::Float(1.0)),
                "location" => Some(FieldValue::Coordinate(LatLng::new(45.0, 3.0))),
                _ => None,
            }
        }
    }

    #[test]
    fn test_valid_spec_passes() {
        let spec = FilterSpec::new().constrain("area", Constraint::Range(Range::new(0.0, 5.0)));
        assert!(validate_filter_spec::<Stand>(&spec).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let spec = FilterSpec::new().constrain("area", Constraint::Range(Range::new(10.0, 5.0)));
        let err = validate_filter_spec::<Stand>(&spec).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidRange {
                attribute: "area".to_string(),
                min: 10.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let spec = FilterSpec::new().constrain("slope", Constraint::Range(Range::new(0.0, 1.0)));
        let err = validate_filter_spec::<Stand>(&spec).unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { attribute } if attribute == "slope"));
    }

    #[test]
    fn test_inverted_bounding_box_rejected() {
        let spec = FilterSpec::new().constrain(
            "location",
            Constraint::BoundingBox(BoundingBox::new(
                LatLng::new(50.0, 10.0),
                LatLng::new(40.0, 0.0),
            )),
        );
        let err = validate_filter_spec::<Stand>(&spec).unwrap_err();
        assert!(matches!(err, QueryError::InvalidBoundingBox { .. }));
    }

    #[test]
    fn test_sort_on_unknown_attribute_rejected() {
        assert!(validate_sort::<Stand>(&Sort::asc("area")).is_ok());
        let err = validate_sort::<Stand>(&Sort::desc("age")).unwrap_err();
        assert!(matches!(err, QueryError::UnknownAttribute { .. }));
    }
}
