//! Integer points, axis-aligned bounds, and distance helpers.
//!
//! Playground and surface coordinates are both whole pixels. Anything coming
//! from the outside as a float is truncated toward zero at construction;
//! transforms never re-round.

use serde::{Deserialize, Serialize};

/// A whole-pixel position on the playground or the drawing surface.
///
/// `visible` is scratch state written by viewport culling. It is not part of
/// the point's identity, so `PartialEq` ignores it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    #[serde(skip)]
    pub visible: bool,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            visible: false,
        }
    }

    /// Build a point from arbitrary float input.
    ///
    /// NaN and infinities become 0; everything else truncates toward zero and
    /// saturates at the `i32` range.
    pub fn coerce(x: f64, y: f64) -> Self {
        Self::new(coerce_coord(x), coerce_coord(y))
    }

    /// Component-wise sum.
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    /// Component-wise difference (`self - other`).
    pub fn delta(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn as_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

/// Truncate a float coordinate, mapping non-finite input to 0.
pub fn coerce_coord(v: f64) -> i32 {
    if v.is_finite() {
        // `as` saturates on overflow.
        v.trunc() as i32
    } else {
        0
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Axis-aligned box in playground units. Edges are inclusive for hit tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = p.as_f64();
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Shift by `-origin`, i.e. playground → surface.
    pub fn translated(&self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x as f64,
            y: self.y - origin.y as f64,
            ..*self
        }
    }
}
