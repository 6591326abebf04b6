//! Advertiser-facing read path.
//!
//! Advertisers only ever see a projection of a zone: its CPM rate and a
//! placeholder reach estimate, and only while the zone is active. Inactive
//! zones surface a status with nothing actionable on it; the campaign-start
//! gate in the editor uses the same activity check.

use serde::Serialize;

use crate::config::ESTIMATED_REACH;
use crate::zone::AdZone;

/// What an advertiser is shown for an active zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneListing {
    /// Cost per thousand impressions, straight off the zone.
    pub cpm_rate: f64,
    /// Placeholder audience estimate; not modeled here.
    pub estimated_reach: u32,
}

/// Advertiser-facing status of a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListingStatus {
    Active(ZoneListing),
    /// Not available for campaigns; no operation is exposed.
    Inactive,
}

/// Project a zone into its advertiser-facing listing.
pub fn listing_for(zone: &AdZone) -> ListingStatus {
    if zone.is_active {
        ListingStatus::Active(ZoneListing {
            cpm_rate: zone.price_per_1k,
            estimated_reach: ESTIMATED_REACH,
        })
    } else {
        ListingStatus::Inactive
    }
}

/// Format a reach estimate for display ("~1.5k").
pub fn format_reach(reach: u32) -> String {
    if reach >= 1_000 {
        format!("~{:.1}k", f64::from(reach) / 1_000.0)
    } else {
        format!("~{reach}")
    }
}

/// Format a CPM rate for display ("$12.00").
pub fn format_cpm(rate: f64) -> String {
    format!("${rate:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::zone::{ZoneGeometry, ZoneId};

    fn zone(is_active: bool) -> AdZone {
        AdZone {
            id: ZoneId(9),
            name: "Harbour View".to_string(),
            center: GeoPoint::new(25.2048, 55.2708),
            geometry: ZoneGeometry::Circle { radius: 60.0 },
            is_active,
            price_per_1k: 12.5,
        }
    }

    #[test]
    fn active_zone_lists_cpm_and_reach() {
        let status = listing_for(&zone(true));
        assert_eq!(
            status,
            ListingStatus::Active(ZoneListing {
                cpm_rate: 12.5,
                estimated_reach: ESTIMATED_REACH,
            })
        );
    }

    #[test]
    fn inactive_zone_exposes_nothing() {
        assert_eq!(listing_for(&zone(false)), ListingStatus::Inactive);
    }

    #[test]
    fn reach_formats_in_thousands() {
        assert_eq!(format_reach(1_500), "~1.5k");
        assert_eq!(format_reach(900), "~900");
        assert_eq!(format_reach(10_000), "~10.0k");
    }

    #[test]
    fn cpm_formats_as_dollars() {
        assert_eq!(format_cpm(12.5), "$12.50");
        assert_eq!(format_cpm(0.0), "$0.00");
    }
}
