//! Hover selection with explicit transitions.
//!
//! The current selection is compared against the new hit on every update;
//! a [`Transition`] is produced only when they differ, so re-entering the
//! idea that is already selected is silent.

use mm_core::IdeaId;

/// A selection change: what was selected before and what is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: Option<IdeaId>,
    pub current: Option<IdeaId>,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<IdeaId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<IdeaId> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Replace the selection with the latest hit-test result.
    pub fn update(&mut self, hit: Option<IdeaId>) -> Option<Transition> {
        if hit == self.current {
            return None;
        }
        let t = Transition {
            previous: self.current,
            current: hit,
        };
        self.current = hit;
        log::debug!("selection {:?} -> {:?}", t.previous, t.current);
        Some(t)
    }

    /// Drop the selection if it points at an idea that no longer exists.
    pub fn forget_missing(&mut self, exists: impl Fn(IdeaId) -> bool) {
        if self.current.is_some_and(|id| !exists(id)) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::{ApproxMeasure, MindMap};
    use pretty_assertions::assert_eq;

    #[test]
    fn transitions_fire_once_per_change() {
        let mut map = MindMap::default();
        let a = map.create_idea(None, 0, 0, "a", None, &ApproxMeasure).unwrap();
        let b = map.create_idea(None, 0, 0, "b", None, &ApproxMeasure).unwrap();
        let mut sel = Selection::new();

        assert_eq!(
            sel.update(Some(a)),
            Some(Transition {
                previous: None,
                current: Some(a)
            })
        );
        assert_eq!(sel.update(Some(a)), None);
        assert_eq!(
            sel.update(Some(b)),
            Some(Transition {
                previous: Some(a),
                current: Some(b)
            })
        );
        assert!(sel.update(None).is_some());
        assert_eq!(sel.update(None), None);
        assert!(sel.is_empty());

        sel.update(Some(a));
        map.remove_idea(a).unwrap();
        sel.forget_missing(|id| map.contains(id));
        assert_eq!(sel.current(), None);
    }
}
