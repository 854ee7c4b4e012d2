//! Deterministic mock dataset for development and tests
//!
//! The fixtures stand in for a real backend: fixed ids and timestamps so
//! query results are reproducible from one run to the next.

use crate::data::clear_cut::{ClearCut, ClearCutStatus};
use crate::core::filter::Range;
use crate::core::geo::{BoundingBox, LatLng};
use chrono::{DateTime, Utc};
use uuid::uuid;

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// The mock clear-cutting collection
///
/// Eight cuts spread across French forests, covering every status, both
/// ecological-zoning values, and a usable spread of areas, years and slopes.
pub fn mock_clear_cuts() -> Vec<ClearCut> {
    vec![
        ClearCut {
            id: uuid!("0191e9cd-0001-7000-8000-000000000001"),
            city: "Aurillac".to_string(),
            area_hectare: 4.2,
            cut_year: 2023,
            slope_percent: 18.0,
            status: ClearCutStatus::ToValidate,
            ecological_zoning: false,
            location: LatLng::new(44.93, 2.44),
            created_at: ts(1_704_067_200),
            updated_at: ts(1_704_067_200),
        },
        ClearCut {
            id: uuid!("0191e9cd-0002-7000-8000-000000000002"),
            city: "Tulle".to_string(),
            area_hectare: 12.8,
            cut_year: 2022,
            slope_percent: 32.5,
            status: ClearCutStatus::Validated,
            ecological_zoning: true,
            location: LatLng::new(45.27, 1.77),
            created_at: ts(1_704_153_600),
            updated_at: ts(1_706_745_600),
        },
        ClearCut {
            id: uuid!("0191e9cd-0003-7000-8000-000000000003"),
            city: "Gap".to_string(),
            area_hectare: 0.8,
            cut_year: 2024,
            slope_percent: 41.0,
            status: ClearCutStatus::ToValidate,
            ecological_zoning: true,
            location: LatLng::new(44.56, 6.08),
            created_at: ts(1_704_240_000),
            updated_at: ts(1_704_240_000),
        },
        ClearCut {
            id: uuid!("0191e9cd-0004-7000-8000-000000000004"),
            city: "Quimper".to_string(),
            area_hectare: 7.5,
            cut_year: 2021,
            slope_percent: 4.2,
            status: ClearCutStatus::Legal,
            ecological_zoning: false,
            location: LatLng::new(47.99, -4.10),
            created_at: ts(1_704_326_400),
            updated_at: ts(1_704_326_400),
        },
        ClearCut {
            id: uuid!("0191e9cd-0005-7000-8000-000000000005"),
            city: "Mende".to_string(),
            area_hectare: 22.1,
            cut_year: 2023,
            slope_percent: 27.3,
            status: ClearCutStatus::Validated,
            ecological_zoning: false,
            location: LatLng::new(44.52, 3.50),
            created_at: ts(1_704_412_800),
            updated_at: ts(1_707_004_800),
        },
        ClearCut {
            id: uuid!("0191e9cd-0006-7000-8000-000000000006"),
            city: "Épinal".to_string(),
            area_hectare: 3.3,
            cut_year: 2024,
            slope_percent: 11.8,
            status: ClearCutStatus::ToValidate,
            ecological_zoning: false,
            location: LatLng::new(48.17, 6.45),
            created_at: ts(1_704_499_200),
            updated_at: ts(1_704_499_200),
        },
        ClearCut {
            id: uuid!("0191e9cd-0007-7000-8000-000000000007"),
            city: "Foix".to_string(),
            area_hectare: 9.9,
            cut_year: 2022,
            slope_percent: 38.6,
            status: ClearCutStatus::Legal,
            ecological_zoning: true,
            location: LatLng::new(42.96, 1.61),
            created_at: ts(1_704_585_600),
            updated_at: ts(1_704_585_600),
        },
        ClearCut {
            id: uuid!("0191e9cd-0008-7000-8000-000000000008"),
            city: "Guéret".to_string(),
            area_hectare: 1.4,
            cut_year: 2021,
            slope_percent: 8.9,
            status: ClearCutStatus::Validated,
            ecological_zoning: false,
            location: LatLng::new(46.17, 1.87),
            created_at: ts(1_704_672_000),
            updated_at: ts(1_704_672_000),
        },
    ]
}

/// The filter bounds a UI would offer for a record collection
///
/// Computed from the records themselves so the offered ranges always cover
/// the data, the way the mocked filters endpoint derives its values.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBounds {
    pub area_hectare: Range,
    pub cut_year: Range,
    pub slope_percent: Range,
    pub statuses: Vec<ClearCutStatus>,
    pub cities: Vec<String>,
    pub bounds: Option<BoundingBox>,
}

/// Derive the filter bounds from a record collection
///
/// Cities come back sorted and deduplicated; statuses keep a fixed review
/// order. Empty input yields empty ranges (0..0) and no bounding box.
pub fn filter_bounds(records: &[ClearCut]) -> FilterBounds {
    let mut cities: Vec<String> = records.iter().map(|cut| cut.city.clone()).collect();
    cities.sort();
    cities.dedup();

    let statuses = [
        ClearCutStatus::ToValidate,
        ClearCutStatus::Validated,
        ClearCutStatus::Legal,
    ]
    .into_iter()
    .filter(|status| records.iter().any(|cut| cut.status == *status))
    .collect();

    FilterBounds {
        area_hectare: value_range(records.iter().map(|cut| cut.area_hectare)),
        cut_year: value_range(records.iter().map(|cut| cut.cut_year as f64)),
        slope_percent: value_range(records.iter().map(|cut| cut.slope_percent)),
        statuses,
        cities,
        bounds: BoundingBox::enclosing(records.iter().map(|cut| &cut.location)),
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Range {
    let mut range: Option<Range> = None;
    for value in values {
        range = Some(match range {
            Some(r) => Range::new(r.min.min(value), r.max.max(value)),
            None => Range::new(value, value),
        });
    }
    range.unwrap_or(Range::new(0.0, 0.0))
}
