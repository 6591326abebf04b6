//! Action executor system — drains the [`EditorActionQueue`] each frame and
//! applies every queued [`EditorAction`] to the editor state, recording
//! results in the [`EditorLog`].
//!
//! Each action has a dedicated execution function that gates on role,
//! re-resolves the selection against the freshest registry snapshot, mutates
//! the working session, and emits the matching side-effect event. The engine
//! never writes the registry itself.

use bevy::prelude::*;

use crate::campaign::{listing_for, ListingStatus};
use crate::config::{
    MAX_HEIGHT_M, MAX_RADIUS_M, MAX_WIDTH_M, MIN_HEIGHT_M, MIN_RADIUS_M, MIN_WIDTH_M,
    MIN_ZONE_AREA,
};
use crate::events::{
    CampaignStartRequested, PaymentInitiated, ZoneCreateRequested, ZoneDeleteRequested, ZoneUpdated,
};
use crate::geo::GeoPoint;
use crate::pricing::{quote, tier_for};
use crate::zone::{
    is_viable_area, AdZone, ZoneDimension, ZoneField, ZoneId, ZoneRegistry, ZoneShape,
};
use crate::UserRole;

use super::actions::EditorAction;
use super::log::EditorLog;
use super::queue::EditorActionQueue;
use super::results::{ActionError, ActionResult};
use super::state::ZoneEditor;

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
#[allow(clippy::too_many_arguments)]
pub fn execute_editor_actions(
    mut queue: ResMut<EditorActionQueue>,
    mut log: ResMut<EditorLog>,
    mut editor: ResMut<ZoneEditor>,
    registry: Res<ZoneRegistry>,
    role: Res<UserRole>,
    mut created: EventWriter<ZoneCreateRequested>,
    mut updated: EventWriter<ZoneUpdated>,
    mut deleted: EventWriter<ZoneDeleteRequested>,
    mut payments: EventWriter<PaymentInitiated>,
    mut campaigns: EventWriter<CampaignStartRequested>,
) {
    for action in queue.drain() {
        let result = match &action {
            EditorAction::ArmDrawTool { shape } => exec_arm_draw_tool(*shape, *role, &mut editor),
            EditorAction::MapClick { point } => {
                exec_map_click(*point, *role, &mut editor, &mut created)
            }
            EditorAction::Select { zone_id } => exec_select(*zone_id, &mut editor, &registry),
            EditorAction::BeginRename => exec_begin_rename(*role, &mut editor),
            EditorAction::CommitRename { name } => {
                exec_commit_rename(name.clone(), *role, &mut editor, &registry, &mut updated)
            }
            EditorAction::Resize { dimension, meters } => exec_resize(
                *dimension,
                *meters,
                *role,
                &mut editor,
                &registry,
                &mut updated,
            ),
            EditorAction::RequestActivation { months } => {
                exec_request_activation(*months, *role, &mut editor, &registry, &mut payments)
            }
            EditorAction::DeleteZone => exec_delete_zone(*role, &mut editor, &mut deleted),
            EditorAction::StartCampaign => {
                exec_start_campaign(*role, &mut editor, &registry, &mut campaigns)
            }
        };
        if let ActionResult::Error(err) = &result {
            debug!("editor refused {:?}: {:?}", action, err);
        }
        log.push(action, result);
    }
}

// ---------------------------------------------------------------------------
// Selection resolution
// ---------------------------------------------------------------------------

/// Re-resolve the selected zone against the freshest registry snapshot.
///
/// The editor only remembers an id; the zone itself may have been removed by
/// another collaborator since the last frame. When that happens the editor
/// self-corrects to Idle and the action reports a warning, not a failure.
fn resolve_selection<'r>(
    editor: &mut ZoneEditor,
    registry: &'r ZoneRegistry,
) -> Result<&'r AdZone, ActionResult> {
    let Some(id) = editor.selected_id() else {
        return Err(ActionResult::Error(ActionError::NothingSelected));
    };
    match registry.get(id) {
        Some(zone) => Ok(zone),
        None => {
            editor.clear();
            Err(ActionResult::SuccessWithWarning(format!(
                "zone {id} was removed externally; selection cleared"
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

fn exec_arm_draw_tool(shape: ZoneShape, role: UserRole, editor: &mut ZoneEditor) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    if editor.arm_draw_tool(shape) {
        debug!("draw tool armed: {}", shape.name());
    }
    ActionResult::Success
}

fn exec_map_click(
    point: GeoPoint,
    role: UserRole,
    editor: &mut ZoneEditor,
    created: &mut EventWriter<ZoneCreateRequested>,
) -> ActionResult {
    match (role, editor.armed_shape()) {
        // Regular users relocate their own map position on clicks; that is
        // outside this engine. Their selection, if any, stays put.
        (UserRole::Regular, _) => ActionResult::Success,
        (UserRole::ZoneOwner, Some(shape)) => {
            created.send(ZoneCreateRequested { point, shape });
            editor.clear();
            ActionResult::Success
        }
        // Clicking empty map clears any selection.
        _ => {
            editor.clear();
            ActionResult::Success
        }
    }
}

fn exec_select(
    zone_id: Option<ZoneId>,
    editor: &mut ZoneEditor,
    registry: &ZoneRegistry,
) -> ActionResult {
    let Some(id) = zone_id else {
        editor.clear();
        return ActionResult::Success;
    };
    match registry.get(id) {
        Some(zone) => {
            editor.open_session(zone.clone());
            ActionResult::Success
        }
        None => {
            editor.clear();
            ActionResult::SuccessWithWarning(format!("zone {id} no longer exists"))
        }
    }
}

fn exec_begin_rename(role: UserRole, editor: &mut ZoneEditor) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    match editor.session_mut() {
        Some(session) => {
            session.renaming = true;
            ActionResult::Success
        }
        None => ActionResult::Error(ActionError::NothingSelected),
    }
}

fn exec_commit_rename(
    name: String,
    role: UserRole,
    editor: &mut ZoneEditor,
    registry: &ZoneRegistry,
    updated: &mut EventWriter<ZoneUpdated>,
) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    if let Err(result) = resolve_selection(editor, registry) {
        return result;
    }
    let Some(session) = editor.session_mut() else {
        return ActionResult::Error(ActionError::NothingSelected);
    };
    // Name updates cannot violate geometry; empty names are accepted.
    if let Ok(zone) = session.zone.with_field(ZoneField::Name(name)) {
        session.zone = zone;
    }
    session.renaming = false;
    updated.send(ZoneUpdated {
        zone: session.zone.clone(),
    });
    ActionResult::Success
}

fn exec_resize(
    dimension: ZoneDimension,
    meters: f64,
    role: UserRole,
    editor: &mut ZoneEditor,
    registry: &ZoneRegistry,
    updated: &mut EventWriter<ZoneUpdated>,
) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    if let Err(result) = resolve_selection(editor, registry) {
        return result;
    }
    let Some(session) = editor.session_mut() else {
        return ActionResult::Error(ActionError::NothingSelected);
    };
    let clamped = clamp_dimension(dimension, meters);
    match session.zone.with_field(ZoneField::dimension(dimension, clamped)) {
        Ok(zone) => {
            session.zone = zone;
            updated.send(ZoneUpdated {
                zone: session.zone.clone(),
            });
            ActionResult::Success
        }
        // Mismatched dimension for the shape: the prior value is retained.
        Err(_) => ActionResult::Error(ActionError::InvalidGeometry),
    }
}

fn exec_request_activation(
    months: u32,
    role: UserRole,
    editor: &mut ZoneEditor,
    registry: &ZoneRegistry,
    payments: &mut EventWriter<PaymentInitiated>,
) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    if let Err(result) = resolve_selection(editor, registry) {
        return result;
    }
    let Some(session) = editor.session() else {
        return ActionResult::Error(ActionError::NothingSelected);
    };
    if tier_for(months).is_none() {
        return ActionResult::Error(ActionError::UnknownPlan);
    }
    let area = session.area_sqm();
    if !is_viable_area(area, MIN_ZONE_AREA) {
        return ActionResult::Error(ActionError::BelowMinimumArea);
    }
    let price = quote(area, months);
    info!(
        "payment initiated: zone {} for {} months at ${}",
        session.zone.id, months, price.total_usd
    );
    payments.send(PaymentInitiated {
        zone: session.zone.clone(),
        months,
        total_usd: price.total_usd,
    });
    ActionResult::Success
}

fn exec_delete_zone(
    role: UserRole,
    editor: &mut ZoneEditor,
    deleted: &mut EventWriter<ZoneDeleteRequested>,
) -> ActionResult {
    if role != UserRole::ZoneOwner {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    let Some(id) = editor.selected_id() else {
        return ActionResult::Error(ActionError::NothingSelected);
    };
    // Unconditional: no confirmation step at this layer, and it does not
    // matter whether the zone still resolves — the owner asked it gone.
    deleted.send(ZoneDeleteRequested { id });
    editor.clear();
    ActionResult::Success
}

fn exec_start_campaign(
    role: UserRole,
    editor: &mut ZoneEditor,
    registry: &ZoneRegistry,
    campaigns: &mut EventWriter<CampaignStartRequested>,
) -> ActionResult {
    if role != UserRole::Advertiser {
        return ActionResult::Error(ActionError::RoleNotPermitted);
    }
    let zone = match resolve_selection(editor, registry) {
        Ok(zone) => zone,
        Err(result) => return result,
    };
    match listing_for(zone) {
        ListingStatus::Active(_) => {
            campaigns.send(CampaignStartRequested { zone: zone.clone() });
            ActionResult::Success
        }
        ListingStatus::Inactive => ActionResult::Error(ActionError::ZoneInactive),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Editor-level editing range per dimension. The model only enforces
/// positivity; these clamps are the UI contract.
fn clamp_dimension(dimension: ZoneDimension, meters: f64) -> f64 {
    match dimension {
        ZoneDimension::Radius => meters.clamp(MIN_RADIUS_M, MAX_RADIUS_M),
        ZoneDimension::Width => meters.clamp(MIN_WIDTH_M, MAX_WIDTH_M),
        ZoneDimension::Height => meters.clamp(MIN_HEIGHT_M, MAX_HEIGHT_M),
    }
}
