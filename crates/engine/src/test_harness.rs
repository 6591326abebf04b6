//! # TestMap — headless test harness for the zone engine
//!
//! Wraps `bevy::app::App` + [`EnginePlugin`] plus a test-side stand-in for
//! the external collection owner, so editor flows can be driven through the
//! real action queue without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::editor::{
    execute_editor_actions, ActionResult, EditorAction, EditorActionQueue, EditorLog, ZoneEditor,
};
use crate::events::{ZoneCreateRequested, ZoneDeleteRequested, ZoneUpdated};
use crate::zone::{AdZone, ZoneId, ZoneRegistry};
use crate::{EnginePlugin, UserRole};

/// Sequential id source for zones created through the harness collaborator.
#[derive(Resource, Default)]
struct NextZoneId(u64);

/// A headless Bevy App wrapping [`EnginePlugin`] for editor flow tests.
///
/// Use builder methods to set up zones and the acting role, then push
/// actions with [`TestMap::act`] and assert on the resulting state, events,
/// and log entries.
pub struct TestMap {
    app: App,
}

impl TestMap {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(EnginePlugin);
        app.init_resource::<NextZoneId>();

        // Test-side stand-in for the external collection owner: applies the
        // engine's side-effect events to the registry.
        app.add_systems(Update, apply_zone_side_effects.after(execute_editor_actions));

        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_role(mut self, role: UserRole) -> Self {
        *self.app.world_mut().resource_mut::<UserRole>() = role;
        self
    }

    pub fn with_zone(mut self, zone: AdZone) -> Self {
        self.app
            .world_mut()
            .resource_mut::<ZoneRegistry>()
            .upsert(zone);
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Push one action through the real queue and run a frame.
    pub fn act(&mut self, action: EditorAction) {
        self.app
            .world_mut()
            .resource_mut::<EditorActionQueue>()
            .push(action);
        self.app.update();
    }

    /// Run `frames` empty frames.
    pub fn tick(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Remove a zone behind the editor's back, as a concurrent session would.
    pub fn remove_zone(&mut self, id: ZoneId) {
        self.app
            .world_mut()
            .resource_mut::<ZoneRegistry>()
            .remove(id);
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn editor(&self) -> &ZoneEditor {
        self.app.world().resource::<ZoneEditor>()
    }

    pub fn editor_mut(&mut self) -> Mut<'_, ZoneEditor> {
        self.app.world_mut().resource_mut::<ZoneEditor>()
    }

    pub fn registry(&self) -> &ZoneRegistry {
        self.app.world().resource::<ZoneRegistry>()
    }

    /// The most recent (action, result) pair from the editor log.
    pub fn last_result(&self) -> Option<(EditorAction, ActionResult)> {
        self.app.world().resource::<EditorLog>().last().cloned()
    }

    /// Drain every pending event of type `E`.
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }
}

fn apply_zone_side_effects(
    mut created: EventReader<ZoneCreateRequested>,
    mut updated: EventReader<ZoneUpdated>,
    mut deleted: EventReader<ZoneDeleteRequested>,
    mut next_id: ResMut<NextZoneId>,
    mut registry: ResMut<ZoneRegistry>,
) {
    for request in created.read() {
        // Never collide with ids the test seeded directly.
        let floor = registry.iter().map(|zone| zone.id.0).max().unwrap_or(0);
        next_id.0 = next_id.0.max(floor) + 1;
        registry.upsert(AdZone::new_at(
            ZoneId(next_id.0),
            request.point,
            request.shape,
        ));
    }
    for update in updated.read() {
        registry.upsert(update.zone.clone());
    }
    for delete in deleted.read() {
        registry.remove(delete.id);
    }
}
