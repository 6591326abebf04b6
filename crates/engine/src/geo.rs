//! Geographic value types and the flat-earth bounds approximation.
//!
//! All conversions use 1° latitude ≈ 111,111 m and 1° longitude ≈
//! 111,111 × cos(latitude) m. Good enough for zone-sized footprints away
//! from the poles; the map collaborator renders whatever corners it gets.

use serde::{Deserialize, Serialize};

use crate::config::METERS_PER_DEGREE_LAT;

/// A WGS84 coordinate. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Compute the southwest and northeast corners of a rectangle of
/// `width_m` × `height_m` meters centered on `center`.
///
/// Pure and deterministic; called per-frame while a zone is dragged.
pub fn bounds_for(center: GeoPoint, width_m: f64, height_m: f64) -> (GeoPoint, GeoPoint) {
    let lat_offset = (height_m / 2.0) / METERS_PER_DEGREE_LAT;
    let lng_offset = (width_m / 2.0) / (METERS_PER_DEGREE_LAT * center.lat.to_radians().cos());
    (
        GeoPoint::new(center.lat - lat_offset, center.lng - lng_offset),
        GeoPoint::new(center.lat + lat_offset, center.lng + lng_offset),
    )
}
