use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod campaign;
pub mod config;
pub mod editor;
pub mod events;
pub mod geo;
pub mod pricing;
pub mod zone;

#[cfg(test)]
pub mod test_harness;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Who is driving the current session. Gates which editor and campaign
/// actions are reachable.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    /// Draws, edits, prices, and manages zones.
    ZoneOwner,
    /// Browses active zones and starts campaigns against them.
    Advertiser,
    /// No zone or campaign affordances; map clicks move their own position,
    /// which is handled outside this engine.
    #[default]
    Regular,
}

/// The whole engine: zone collection contract, events, and the editor loop.
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UserRole>();
        app.add_plugins((zone::ZonesPlugin, editor::ZoneEditorPlugin));
    }
}
