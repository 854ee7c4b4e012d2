//! Geographic primitives used by records and constraints

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate (latitude/longitude in decimal degrees)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a new coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geographic bounding box defined by its southwest and northeast corners
///
/// Both corners are inclusive: a coordinate lying exactly on an edge of the
/// box is considered inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// Southwest corner (minimum latitude and longitude)
    pub sw: LatLng,
    /// Northeast corner (maximum latitude and longitude)
    pub ne: LatLng,
}

impl BoundingBox {
    /// Create a new bounding box from its corners
    pub fn new(sw: LatLng, ne: LatLng) -> Self {
        Self { sw, ne }
    }

    /// Check that the corners are not inverted
    pub fn is_well_formed(&self) -> bool {
        self.sw.lat <= self.ne.lat && self.sw.lng <= self.ne.lng
    }

    /// Check whether a coordinate lies inside the box (edges included)
    pub fn contains(&self, point: &LatLng) -> bool {
        self.sw.lat <= point.lat
            && point.lat <= self.ne.lat
            && self.sw.lng <= point.lng
            && point.lng <= self.ne.lng
    }

    /// Smallest box enclosing all the given coordinates
    ///
    /// Returns `None` for an empty input.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = Self::new(*first, *first);

        for point in points {
            bbox.sw.lat = bbox.sw.lat.min(point.lat);
            bbox.sw.lng = bbox.sw.lng.min(point.lng);
            bbox.ne.lat = bbox.ne.lat.max(point.lat);
            bbox.ne.lng = bbox.ne.lng.max(point.lng);
        }

        Some(bbox)
    }
}
