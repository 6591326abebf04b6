//! The collection owner's side of the collaborator contract.
//!
//! The engine emits creation/update/deletion requests and payment and
//! campaign signals; these systems apply them to the [`ZoneRegistry`] the
//! host owns. Payment confirmation is simulated as instant — in production
//! a payment provider sits between [`PaymentInitiated`] and the `is_active`
//! flip.

use bevy::prelude::*;

use engine::editor::execute_editor_actions;
use engine::events::{
    CampaignStartRequested, PaymentInitiated, ZoneCreateRequested, ZoneDeleteRequested, ZoneUpdated,
};
use engine::zone::{AdZone, ZoneId, ZoneRegistry};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Source of unique zone ids, assigned once at creation and never reused.
#[derive(Resource, Debug, Default)]
pub struct ZoneIdAllocator {
    next: u64,
}

impl ZoneIdAllocator {
    pub fn allocate(&mut self) -> ZoneId {
        self.next += 1;
        ZoneId(self.next)
    }
}

/// Campaigns started by advertisers, in start order.
#[derive(Resource, Debug, Default)]
pub struct CampaignBook {
    pub started: Vec<(ZoneId, String)>,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Apply zone creation/update/deletion requests to the owned collection.
pub fn apply_zone_requests(
    mut created: EventReader<ZoneCreateRequested>,
    mut updated: EventReader<ZoneUpdated>,
    mut deleted: EventReader<ZoneDeleteRequested>,
    mut ids: ResMut<ZoneIdAllocator>,
    mut registry: ResMut<ZoneRegistry>,
) {
    for request in created.read() {
        let zone = AdZone::new_at(ids.allocate(), request.point, request.shape);
        info!(
            "zone {} placed at ({:.4}, {:.4}) as {}",
            zone.id,
            request.point.lat,
            request.point.lng,
            request.shape.name()
        );
        registry.upsert(zone);
    }
    for update in updated.read() {
        registry.upsert(update.zone.clone());
    }
    for delete in deleted.read() {
        if registry.remove(delete.id).is_some() {
            info!("zone {} deleted", delete.id);
        }
    }
}

/// Stand-in payment provider: every initiation is confirmed immediately,
/// which is the moment a zone becomes active.
pub fn confirm_payments(
    mut payments: EventReader<PaymentInitiated>,
    mut registry: ResMut<ZoneRegistry>,
) {
    for payment in payments.read() {
        info!(
            "payment of ${} confirmed for zone {} ({} months)",
            payment.total_usd, payment.zone.id, payment.months
        );
        if let Some(zone) = registry.get_mut(payment.zone.id) {
            zone.is_active = true;
        }
    }
}

/// Record campaign starts for later inspection.
pub fn record_campaigns(
    mut campaigns: EventReader<CampaignStartRequested>,
    mut book: ResMut<CampaignBook>,
) {
    for campaign in campaigns.read() {
        info!(
            "campaign started on zone {} ({})",
            campaign.zone.id, campaign.zone.name
        );
        book.started
            .push((campaign.zone.id, campaign.zone.name.clone()));
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Wires the host systems after the editor executor so side effects land in
/// the collection within the same frame they were requested.
pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZoneIdAllocator>()
            .init_resource::<CampaignBook>();

        app.add_systems(
            Update,
            (apply_zone_requests, confirm_payments, record_campaigns)
                .chain()
                .after(execute_editor_actions),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
