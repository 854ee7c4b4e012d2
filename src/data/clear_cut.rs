//! The clear-cutting domain record

use crate::core::field::FieldValue;
use crate::core::geo::LatLng;
use crate::core::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a clear-cutting report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClearCutStatus {
    /// Reported, awaiting review
    ToValidate,
    /// Reviewed and confirmed
    Validated,
    /// Reviewed and found compliant with forestry regulations
    Legal,
}

impl ClearCutStatus {
    /// The snake_case name used in filter values and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearCutStatus::ToValidate => "to_validate",
            ClearCutStatus::Validated => "validated",
            ClearCutStatus::Legal => "legal",
        }
    }
}

/// A clear-cutting event
///
/// One record per detected cut: where it happened, how large and steep the
/// cut area is, which year it was cut, and how far along review is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClearCut {
    /// Unique identifier
    pub id: Uuid,

    /// Municipality the cut area belongs to
    pub city: String,

    /// Cut area in hectares
    pub area_hectare: f64,

    /// Year the cut was detected
    pub cut_year: i64,

    /// Average slope of the cut area, in percent
    pub slope_percent: f64,

    /// Review status
    pub status: ClearCutStatus,

    /// Whether the cut area overlaps a protected ecological zoning
    pub ecological_zoning: bool,

    /// Centroid of the cut area
    pub location: LatLng,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl ClearCut {
    /// Create a new record with a fresh id and current timestamps
    pub fn new(
        city: impl Into<String>,
        area_hectare: f64,
        cut_year: i64,
        slope_percent: f64,
        status: ClearCutStatus,
        ecological_zoning: bool,
        location: LatLng,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            city: city.into(),
            area_hectare,
            cut_year,
            slope_percent,
            status,
            ecological_zoning,
            location,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for ClearCut {
    fn resource_name() -> &'static str {
        "clear-cuts"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn schema() -> &'static [&'static str] {
        &[
            "id",
            "city",
            "area_hectare",
            "cut_year",
            "slope_percent",
            "status",
            "ecological_zoning",
            "location",
            "created_at",
            "updated_at",
        ]
    }

    fn field_value(&self, attribute: &str) -> Option<FieldValue> {
        match attribute {
            "id" => Some(FieldValue::Uuid(self.id)),
            "city" => Some(FieldValue::String(self.city.clone())),
            "area_hectare" => Some(FieldValue::Float(self.area_hectare)),
            "cut_year" => Some(FieldValue::Integer(self.cut_year)),
            "slope_percent" => Some(FieldValue::Float(self.slope_percent)),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            "ecological_zoning" => Some(FieldValue::Boolean(self.ecological_zoning)),
            "location" => Some(FieldValue::Coordinate(self.location)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}
