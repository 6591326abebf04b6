//! Outbound side-effect events — the engine's half of the collaborator
//! contract.
//!
//! All of these are fire-and-forget: the engine emits them and consumes no
//! return value. The host applies creation/update/deletion requests to the
//! [`crate::zone::ZoneRegistry`] it owns, runs payments, and starts
//! campaigns.

use bevy::prelude::*;

use crate::geo::GeoPoint;
use crate::zone::{AdZone, ZoneId, ZoneShape};

/// The owner clicked the map with a draw tool armed. The collection owner is
/// expected to construct the zone (see [`AdZone::new_at`]) and assign its id.
#[derive(Event, Debug, Clone)]
pub struct ZoneCreateRequested {
    pub point: GeoPoint,
    pub shape: ZoneShape,
}

/// An edit was applied to the working session; carries the full updated zone
/// for optimistic write-through into the external collection.
#[derive(Event, Debug, Clone)]
pub struct ZoneUpdated {
    pub zone: AdZone,
}

/// The owner deleted the selected zone.
#[derive(Event, Debug, Clone)]
pub struct ZoneDeleteRequested {
    pub id: ZoneId,
}

/// The owner picked a duration plan for a viable zone. The payment
/// collaborator flips `is_active` once payment is confirmed; the engine
/// never does.
#[derive(Event, Debug, Clone)]
pub struct PaymentInitiated {
    pub zone: AdZone,
    pub months: u32,
    pub total_usd: String,
}

/// An advertiser requested a campaign on an active zone.
#[derive(Event, Debug, Clone)]
pub struct CampaignStartRequested {
    pub zone: AdZone,
}
