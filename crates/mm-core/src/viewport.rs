//! The window onto the playground.
//!
//! The viewport origin is the playground coordinate drawn at the surface's
//! top-left pixel. Its size mirrors the surface and only panning moves it.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Playground extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playground {
    pub width: i32,
    pub height: i32,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Place a `width × height` surface over the playground.
    ///
    /// Each axis where the playground is larger than the surface is centered;
    /// the others start at 0.
    pub fn centered(playground: Playground, width: i32, height: i32) -> Self {
        let x = if playground.width > width {
            playground.width / 2 - width / 2
        } else {
            0
        };
        let y = if playground.height > height {
            playground.height / 2 - height / 2
        } else {
            0
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Surface → playground.
    pub fn to_playground(&self, surface: Point) -> Point {
        surface.offset(self.origin())
    }

    /// Playground → surface.
    pub fn to_surface(&self, playground: Point) -> Point {
        playground.delta(self.origin())
    }

    /// Inclusive containment test on both axes.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Same as [`Viewport::contains`], recording the result on the point.
    pub fn mark_visible(&self, p: &mut Point) -> bool {
        p.visible = self.contains(*p);
        p.visible
    }

    /// Drag the playground by a surface-space cursor delta.
    ///
    /// Moving the cursor right reveals content to the left, so the origin
    /// moves opposite to the drag.
    pub fn pan(&mut self, cursor_delta: Point) {
        self.x -= cursor_delta.x;
        self.y -= cursor_delta.y;
        log::trace!("viewport panned to ({}, {})", self.x, self.y);
    }

    /// Follow a surface resize; the origin stays where it is.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_larger_playground() {
        let vp = Viewport::centered(Playground::default(), 800, 600);
        assert_eq!((vp.x, vp.y), (600, 700));
        assert_eq!((vp.width, vp.height), (800, 600));
    }

    #[test]
    fn small_playground_pins_origin() {
        let pg = Playground {
            width: 500,
            height: 3000,
        };
        let vp = Viewport::centered(pg, 800, 600);
        assert_eq!(vp.x, 0);
        assert_eq!(vp.y, 1200);
    }

    #[test]
    fn odd_sizes_use_integer_halves() {
        let vp = Viewport::centered(Playground::default(), 801, 599);
        assert_eq!((vp.x, vp.y), (1000 - 400, 1000 - 299));
    }

    #[test]
    fn transforms_round_trip() {
        let vp = Viewport {
            x: -37,
            y: 912,
            width: 640,
            height: 480,
        };
        for &(x, y) in &[(0, 0), (5, -9), (-1000, 1000), (i32::MAX / 4, -7)] {
            let p = Point::new(x, y);
            assert_eq!(vp.to_surface(vp.to_playground(p)), p);
            assert_eq!(vp.to_playground(vp.to_surface(p)), p);
        }
    }

    #[test]
    fn pan_moves_opposite_to_drag() {
        let mut vp = Viewport::centered(Playground::default(), 800, 600);
        vp.pan(Point::new(15, -20));
        assert_eq!((vp.x, vp.y), (585, 720));
    }

    #[test]
    fn containment_is_inclusive() {
        let vp = Viewport {
            x: 100,
            y: 100,
            width: 50,
            height: 50,
        };
        assert!(vp.contains(Point::new(100, 150)));
        assert!(vp.contains(Point::new(150, 100)));
        assert!(!vp.contains(Point::new(99, 120)));
        assert!(!vp.contains(Point::new(120, 151)));
    }
}
