//! Owner-facing editor: a long-lived Idle → Drawing → Editing loop driven by
//! queued actions, with all side effects emitted as events for the host to
//! apply.

pub mod actions;
pub mod executor;
pub mod log;
pub mod plugin;
pub mod queue;
pub mod results;
pub mod state;
pub mod sync;

pub use actions::EditorAction;
pub use executor::execute_editor_actions;
pub use log::EditorLog;
pub use plugin::ZoneEditorPlugin;
pub use queue::EditorActionQueue;
pub use results::{ActionError, ActionResult};
pub use state::{EditSession, EditorState, ZoneEditor};
pub use sync::sync_editor_session;
