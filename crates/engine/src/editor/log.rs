use std::collections::VecDeque;

use bevy::prelude::*;

use super::actions::EditorAction;
use super::results::ActionResult;

/// Bounded history of executed actions and their results, for UI status
/// surfaces and scripted-session inspection. Oldest entries are evicted
/// once [`EditorLog::CAPACITY`] is reached.
#[derive(Resource, Debug, Default)]
pub struct EditorLog {
    entries: VecDeque<(EditorAction, ActionResult)>,
}

impl EditorLog {
    pub const CAPACITY: usize = 64;

    pub fn push(&mut self, action: EditorAction, result: ActionResult) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&(EditorAction, ActionResult)> {
        self.entries.back()
    }

    /// Up to `n` most recent entries, oldest first.
    pub fn iter_recent(&self, n: usize) -> impl Iterator<Item = &(EditorAction, ActionResult)> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_last() {
        let mut log = EditorLog::default();
        assert!(log.last().is_none());

        log.push(EditorAction::BeginRename, ActionResult::Success);
        log.push(EditorAction::DeleteZone, ActionResult::Success);

        let (action, result) = log.last().unwrap();
        assert_eq!(*action, EditorAction::DeleteZone);
        assert!(result.is_success());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut log = EditorLog::default();
        for i in 0..(EditorLog::CAPACITY + 5) {
            log.push(
                EditorAction::RequestActivation { months: i as u32 },
                ActionResult::Success,
            );
        }
        assert_eq!(log.len(), EditorLog::CAPACITY);

        // The five oldest entries are gone.
        let (first, _) = log.iter_recent(EditorLog::CAPACITY).next().unwrap();
        assert_eq!(*first, EditorAction::RequestActivation { months: 5 });
    }

    #[test]
    fn iter_recent_returns_tail_oldest_first() {
        let mut log = EditorLog::default();
        for months in [1u32, 3, 12] {
            log.push(
                EditorAction::RequestActivation { months },
                ActionResult::Success,
            );
        }

        let months: Vec<u32> = log
            .iter_recent(2)
            .map(|(action, _)| match action {
                EditorAction::RequestActivation { months } => *months,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(months, vec![3, 12]);
    }
}
