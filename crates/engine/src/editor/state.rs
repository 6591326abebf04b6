use bevy::prelude::*;

use crate::config::MIN_ZONE_AREA;
use crate::zone::{is_viable_area, AdZone, ZoneId, ZoneShape};

/// Where the owner-facing editor loop currently is. Exclusive by design:
/// arming a draw tool and editing a selection cannot coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// Nothing selected, no tool armed.
    #[default]
    Idle,
    /// A draw tool is armed; the next map click places a zone of this shape.
    Drawing(ZoneShape),
    /// A zone is selected and its working copy is live.
    Editing(EditSession),
}

/// Working copy of the selected zone plus the inline-rename sub-state.
/// At most one session exists at a time (single-selection editor).
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub zone: AdZone,
    /// Whether the inline name editor is open.
    pub renaming: bool,
}

impl EditSession {
    pub fn new(zone: AdZone) -> Self {
        Self {
            zone,
            renaming: false,
        }
    }

    /// Current footprint of the working copy, recomputed on demand.
    pub fn area_sqm(&self) -> u32 {
        self.zone.area_sqm()
    }

    /// Whether the working copy is large enough to activate.
    pub fn is_viable(&self) -> bool {
        is_viable_area(self.area_sqm(), MIN_ZONE_AREA)
    }
}

/// The editor state machine. Transitions live here as pure methods so they
/// are testable without the ECS; the executor system decides when to call
/// them and which side effects to emit.
#[derive(Resource, Debug, Clone, Default)]
pub struct ZoneEditor {
    state: EditorState,
}

impl ZoneEditor {
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, EditorState::Idle)
    }

    /// The armed draw shape, if any.
    pub fn armed_shape(&self) -> Option<ZoneShape> {
        match self.state {
            EditorState::Drawing(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            EditorState::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            EditorState::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Id of the selected zone, if a session is open.
    pub fn selected_id(&self) -> Option<ZoneId> {
        self.session().map(|session| session.zone.id)
    }

    /// Toggle a draw tool: arming the already-armed shape disarms back to
    /// Idle, anything else arms the given shape. Arming while editing drops
    /// the selection. Returns whether a tool is armed afterwards.
    pub fn arm_draw_tool(&mut self, shape: ZoneShape) -> bool {
        match self.state {
            EditorState::Drawing(armed) if armed == shape => {
                self.state = EditorState::Idle;
                false
            }
            _ => {
                self.state = EditorState::Drawing(shape);
                true
            }
        }
    }

    /// Enter `Editing` with a fresh working copy of `zone`.
    pub fn open_session(&mut self, zone: AdZone) {
        self.state = EditorState::Editing(EditSession::new(zone));
    }

    /// Replace the session's working copy with the latest external state,
    /// keeping the rename sub-state. No-op outside `Editing`.
    pub fn refresh_session(&mut self, zone: AdZone) {
        if let EditorState::Editing(session) = &mut self.state {
            session.zone = zone;
        }
    }

    /// Back to `Idle`, dropping any armed tool or session.
    pub fn clear(&mut self) {
        self.state = EditorState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn zone() -> AdZone {
        AdZone::new_at(ZoneId(4), GeoPoint::new(25.2, 55.27), ZoneShape::Circle)
    }

    #[test]
    fn arm_twice_with_same_shape_returns_to_idle() {
        for shape in [ZoneShape::Circle, ZoneShape::Rectangle] {
            let mut editor = ZoneEditor::default();
            assert!(editor.arm_draw_tool(shape));
            assert_eq!(editor.armed_shape(), Some(shape));
            assert!(!editor.arm_draw_tool(shape));
            assert!(editor.is_idle());
        }
    }

    #[test]
    fn arming_a_different_shape_rearms() {
        let mut editor = ZoneEditor::default();
        editor.arm_draw_tool(ZoneShape::Circle);
        assert!(editor.arm_draw_tool(ZoneShape::Rectangle));
        assert_eq!(editor.armed_shape(), Some(ZoneShape::Rectangle));
    }

    #[test]
    fn arming_while_editing_drops_the_selection() {
        let mut editor = ZoneEditor::default();
        editor.open_session(zone());
        assert!(editor.arm_draw_tool(ZoneShape::Circle));
        assert!(editor.session().is_none());
    }

    #[test]
    fn refresh_keeps_the_rename_substate() {
        let mut editor = ZoneEditor::default();
        editor.open_session(zone());
        editor.session_mut().unwrap().renaming = true;

        let mut renamed = zone();
        renamed.name = "Fresh".to_string();
        editor.refresh_session(renamed);

        let session = editor.session().unwrap();
        assert!(session.renaming);
        assert_eq!(session.zone.name, "Fresh");
    }

    #[test]
    fn session_viability_follows_the_area_floor() {
        let mut editor = ZoneEditor::default();
        editor.open_session(zone());
        assert!(editor.session().unwrap().is_viable());

        let mut tiny = zone();
        tiny.geometry = crate::zone::ZoneGeometry::Circle { radius: 4.0 };
        editor.refresh_session(tiny);
        assert!(!editor.session().unwrap().is_viable());
    }
}
