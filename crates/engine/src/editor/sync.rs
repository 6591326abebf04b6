use bevy::prelude::*;

use crate::zone::ZoneRegistry;

use super::state::ZoneEditor;

/// Keep the editing session honest against external mutation of the zone
/// collection.
///
/// The collection is collaborator-owned and may gain, change, or lose zones
/// between frames. Whenever it changes, the session's working copy is
/// re-derived from the latest snapshot; if the selected zone is gone the
/// editor drops to Idle. The editor must never act on a stale reference to
/// a deleted zone — this system is what makes that property hold across
/// frames, and the executor re-resolves again within the frame.
pub fn sync_editor_session(registry: Res<ZoneRegistry>, mut editor: ResMut<ZoneEditor>) {
    if !registry.is_changed() {
        return;
    }
    let Some(id) = editor.selected_id() else {
        return;
    };
    match registry.get(id) {
        Some(zone) => editor.refresh_session(zone.clone()),
        None => {
            info!("selected zone {id} was removed externally; clearing selection");
            editor.clear();
        }
    }
}
