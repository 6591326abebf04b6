//! Demo zones around central Dubai for the headless demo session.

use bevy::prelude::*;

use engine::geo::GeoPoint;
use engine::zone::{AdZone, ZoneRegistry, ZoneShape};

use crate::host::ZoneIdAllocator;

/// Default map center (Dubai).
pub const DUBAI_CENTER: GeoPoint = GeoPoint {
    lat: 25.2048,
    lng: 55.2708,
};

/// Startup system: a small portfolio so both roles have something to look at.
pub fn seed_demo_zones(mut ids: ResMut<ZoneIdAllocator>, mut registry: ResMut<ZoneRegistry>) {
    let mut marina = AdZone::new_at(
        ids.allocate(),
        GeoPoint::new(25.0805, 55.1403),
        ZoneShape::Circle,
    );
    marina.name = "Marina Promenade".to_string();
    marina.is_active = true;
    marina.price_per_1k = 12.5;
    registry.upsert(marina);

    let mut downtown = AdZone::new_at(ids.allocate(), DUBAI_CENTER, ZoneShape::Rectangle);
    downtown.name = "Downtown Billboard".to_string();
    downtown.price_per_1k = 9.0;
    registry.upsert(downtown);

    info!("seeded {} demo zones", registry.len());
}
