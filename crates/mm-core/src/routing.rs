//! Branch routing: which edge of each idea a connector leaves from and
//! arrives at, and where on that edge.
//!
//! Routes are derived from the ideas' current geometry every time they are
//! asked for, so a branch follows its ideas when they move.

use crate::model::Idea;
use serde::{Deserialize, Serialize};

/// An edge of an idea's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Connector endpoint in playground coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub start: Anchor,
    pub end: Anchor,
}

/// Side the connector leaves `from` by, given both ideas' centers.
///
/// Horizontal wins only when strictly dominant.
pub fn infer_start_side(from: (f64, f64), to: (f64, f64)) -> Side {
    let (dx, dy) = (from.0 - to.0, from.1 - to.1);
    if dx.abs() > dy.abs() {
        if dx > 0.0 { Side::Left } else { Side::Right }
    } else if dy < 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Side the connector arrives at `to` by.
///
/// Not the mirror of [`infer_start_side`]: here vertical wins only when
/// strictly dominant, and a diagonal tie resolves to top/bottom.
pub fn infer_end_side(from: (f64, f64), to: (f64, f64)) -> Side {
    let (dx, dy) = (from.0 - to.0, from.1 - to.1);
    if dx.abs() < dy.abs() {
        if dx < 0.0 { Side::Left } else { Side::Right }
    } else if dy > 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Midpoint of `side` on the idea's box, using the skewed center for the
/// free coordinate.
pub fn anchor(idea: &Idea, side: Side) -> Anchor {
    let (cx, cy) = idea.skewed_center();
    let b = idea.bounds();
    let (x, y) = match side {
        Side::Top => (cx, b.y),
        Side::Bottom => (cx, b.bottom()),
        Side::Right => (b.right(), cy),
        Side::Left => (b.x, cy),
    };
    Anchor { x, y, side }
}

/// Route a connector between two ideas, inferring any side not pinned.
pub fn route(from: &Idea, to: &Idea, start_side: Option<Side>, end_side: Option<Side>) -> Route {
    let (fc, tc) = (from.skewed_center(), to.skewed_center());
    let start = start_side.unwrap_or_else(|| infer_start_side(fc, tc));
    let end = end_side.unwrap_or_else(|| infer_end_side(fc, tc));
    Route {
        start: anchor(from, start),
        end: anchor(to, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::IdeaStyle;

    fn idea(x: i32, y: i32, w: f64, h: f64) -> Idea {
        Idea::new("t", x, y, w, h, IdeaStyle::default(), 0)
    }

    #[test]
    fn start_side_prefers_horizontal_when_strictly_larger() {
        assert_eq!(infer_start_side((100.0, 0.0), (0.0, 0.0)), Side::Left);
        assert_eq!(infer_start_side((0.0, 0.0), (100.0, 10.0)), Side::Right);
        assert_eq!(infer_start_side((0.0, 0.0), (10.0, 100.0)), Side::Bottom);
        assert_eq!(infer_start_side((0.0, 100.0), (10.0, 0.0)), Side::Top);
        // |dx| == |dy| falls to the vertical rule.
        assert_eq!(infer_start_side((0.0, 0.0), (50.0, 50.0)), Side::Bottom);
    }

    #[test]
    fn end_side_prefers_vertical_only_when_strictly_larger() {
        assert_eq!(infer_end_side((0.0, 0.0), (10.0, 100.0)), Side::Left);
        assert_eq!(infer_end_side((10.0, 0.0), (0.0, 100.0)), Side::Right);
        assert_eq!(infer_end_side((0.0, 100.0), (100.0, 0.0)), Side::Bottom);
        assert_eq!(infer_end_side((100.0, 0.0), (0.0, 10.0)), Side::Top);
        // Tie resolves vertically on the end side too, but with the opposite sign test.
        assert_eq!(infer_end_side((0.0, 0.0), (50.0, 50.0)), Side::Top);
    }

    #[test]
    fn anchors_sit_on_edge_midpoints_of_skewed_center() {
        let i = idea(100, 200, 60.0, 30.0);
        // padding 20 → center = (100 + (60 + 10)/2, 200 + (30 + 10)/2)
        assert_eq!(i.skewed_center(), (135.0, 220.0));
        assert_eq!(anchor(&i, Side::Top), Anchor { x: 135.0, y: 200.0, side: Side::Top });
        assert_eq!(anchor(&i, Side::Bottom), Anchor { x: 135.0, y: 230.0, side: Side::Bottom });
        assert_eq!(anchor(&i, Side::Left), Anchor { x: 100.0, y: 220.0, side: Side::Left });
        assert_eq!(anchor(&i, Side::Right), Anchor { x: 160.0, y: 220.0, side: Side::Right });
    }

    #[test]
    fn pinned_sides_override_inference() {
        let a = idea(0, 0, 40.0, 40.0);
        let b = idea(500, 0, 40.0, 40.0);
        let r = route(&a, &b, Some(Side::Bottom), Some(Side::Bottom));
        assert_eq!(r.start.side, Side::Bottom);
        assert_eq!(r.end.side, Side::Bottom);

        let r = route(&a, &b, None, None);
        assert_eq!(r.start.side, Side::Right);
        assert_eq!(r.end.side, Side::Top);
    }
}
