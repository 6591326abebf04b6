use bevy::prelude::*;

use super::actions::EditorAction;

/// FIFO of actions waiting to be executed. Collaborators (UI input handlers,
/// scripted sessions, tests) push; the executor drains once per frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct EditorActionQueue {
    pending: Vec<EditorAction>,
}

impl EditorActionQueue {
    pub fn push(&mut self, action: EditorAction) {
        self.pending.push(action);
    }

    pub fn drain(&mut self) -> Vec<EditorAction> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ZoneShape;

    #[test]
    fn drain_preserves_push_order_and_empties() {
        let mut queue = EditorActionQueue::default();
        queue.push(EditorAction::ArmDrawTool {
            shape: ZoneShape::Circle,
        });
        queue.push(EditorAction::BeginRename);
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![
                EditorAction::ArmDrawTool {
                    shape: ZoneShape::Circle
                },
                EditorAction::BeginRename,
            ]
        );
        assert!(queue.is_empty());
    }
}
