//! Hit testing: cursor → idea lookup.
//!
//! The selectable list is rebuilt from the tree for every frame, in the same
//! depth-first order ideas are painted. Hits are searched back to front so
//! the idea painted last (topmost) wins.

use mm_core::{Bounds, IdeaId, MindMap, Point};

/// An idea that can be hovered this frame, with its playground box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selectable {
    pub id: IdeaId,
    pub bounds: Bounds,
}

/// Displayed ideas in paint order.
pub fn selectables(map: &MindMap) -> Vec<Selectable> {
    map.depth_first()
        .into_iter()
        .filter_map(|id| {
            let idea = map.get(id)?;
            idea.display.then(|| Selectable {
                id,
                bounds: idea.bounds(),
            })
        })
        .collect()
}

/// Find the topmost idea containing `cursor` (playground coordinates).
/// Returns `None` over empty playground.
pub fn hit_test(list: &[Selectable], cursor: Point) -> Option<IdeaId> {
    let hit = list
        .iter()
        .rev()
        .find(|s| s.bounds.contains(cursor))
        .map(|s| s.id);
    log::trace!("hit ({}, {}) -> {hit:?}", cursor.x, cursor.y);
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::ApproxMeasure;
    use pretty_assertions::assert_eq;

    fn map() -> (MindMap, IdeaId, IdeaId) {
        let mut map = MindMap::default();
        let root = map
            .create_idea(None, 100, 100, "", None, &ApproxMeasure)
            .unwrap();
        // Overlaps the root's lower-right quarter.
        let child = map
            .create_idea(Some(root), 120, 120, "", None, &ApproxMeasure)
            .unwrap();
        (map, root, child)
    }

    #[test]
    fn list_follows_paint_order() {
        let (map, root, child) = map();
        let ids: Vec<IdeaId> = selectables(&map).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![root, child]);
    }

    #[test]
    fn topmost_wins_and_edges_count() {
        let (map, root, child) = map();
        let list = selectables(&map);

        assert_eq!(hit_test(&list, Point::new(105, 105)), Some(root));
        assert_eq!(hit_test(&list, Point::new(130, 130)), Some(child));
        assert_eq!(hit_test(&list, Point::new(160, 160)), Some(child));
        assert_eq!(hit_test(&list, Point::new(161, 160)), None);
        assert_eq!(hit_test(&list, Point::new(0, 0)), None);
    }

    #[test]
    fn hidden_ideas_are_not_selectable() {
        let (mut map, root, child) = map();
        map.set_display(child, false).unwrap();
        let list = selectables(&map);
        assert_eq!(list.len(), 1);
        assert_eq!(hit_test(&list, Point::new(130, 130)), Some(root));
    }

    #[test]
    fn list_is_rebuilt_not_accumulated() {
        let (mut map, _, child) = map();
        assert_eq!(selectables(&map).len(), 2);
        assert_eq!(selectables(&map).len(), 2);
        map.remove_idea(child).unwrap();
        assert_eq!(selectables(&map).len(), 1);
    }
}
