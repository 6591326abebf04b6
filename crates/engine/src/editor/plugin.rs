//! Plugin wiring the editor subsystem: state, queue, log, sync, executor.

use bevy::prelude::*;

use super::executor::execute_editor_actions;
use super::log::EditorLog;
use super::queue::EditorActionQueue;
use super::state::ZoneEditor;
use super::sync::sync_editor_session;

/// Registers the editor resources and runs session sync before action
/// execution each frame, so every action sees the freshest external state.
pub struct ZoneEditorPlugin;

impl Plugin for ZoneEditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZoneEditor>()
            .init_resource::<EditorActionQueue>()
            .init_resource::<EditorLog>();

        app.add_systems(
            Update,
            (sync_editor_session, execute_editor_actions).chain(),
        );
    }
}
