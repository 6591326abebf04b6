//! System constants for zone geometry, pricing, and editing limits.

/// Meters per degree of latitude (and of longitude at the equator).
/// Longitude degrees shrink by cos(latitude) toward the poles.
pub const METERS_PER_DEGREE_LAT: f64 = 111_111.0;

/// Rental rate in USD per square meter per month. Fixed system constant;
/// changing it is a deployment concern, not a runtime parameter.
pub const ZONE_PRICE_PER_SQM_MONTH: f64 = 0.0025;

/// Minimum viable zone area in square meters. Zones below this can be drawn
/// and edited but not activated for payment.
pub const MIN_ZONE_AREA: u32 = 100;

/// Placeholder audience estimate shown to advertisers for any active zone.
pub const ESTIMATED_REACH: u32 = 1_500;

/// Circle radius editing range in meters.
pub const MIN_RADIUS_M: f64 = 4.0;
pub const MAX_RADIUS_M: f64 = 500.0;

/// Rectangle width editing range in meters.
pub const MIN_WIDTH_M: f64 = 7.0;
pub const MAX_WIDTH_M: f64 = 1_000.0;

/// Rectangle height editing range in meters.
pub const MIN_HEIGHT_M: f64 = 8.0;
pub const MAX_HEIGHT_M: f64 = 1_000.0;

/// Dimensions given to a freshly placed zone.
pub const DEFAULT_RADIUS_M: f64 = 50.0;
pub const DEFAULT_WIDTH_M: f64 = 100.0;
pub const DEFAULT_HEIGHT_M: f64 = 100.0;
