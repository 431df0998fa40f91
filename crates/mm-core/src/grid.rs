//! Snap grid covering the playground.
//!
//! Points are stored column-major: `points[gx][gy]` sits at
//! `(gx * size, gy * size)`. A cell exists iff both coordinates fall strictly
//! inside the playground extent.

use crate::geometry::{Point, distance};
use crate::style::Color;
use crate::viewport::{Playground, Viewport};
use serde::{Deserialize, Serialize};

/// One lattice point. `active` points are drawn emphasized.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub point: Point,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Grid {
    points: Vec<Vec<GridPoint>>,
    size: i32,
    pub color: Color,
}

impl Grid {
    /// Lay out a lattice spaced `size` apart over `playground`.
    ///
    /// `size` must be positive; [`crate::MapperConfig::validate`] guards this.
    pub fn new(playground: Playground, size: i32, color: Color) -> Self {
        let size = size.max(1);
        let cols = cell_count(playground.width, size);
        let rows = cell_count(playground.height, size);

        let points = (0..cols)
            .map(|gx| {
                (0..rows)
                    .map(|gy| GridPoint {
                        point: Point::new(gx as i32 * size, gy as i32 * size),
                        active: false,
                    })
                    .collect()
            })
            .collect();

        log::debug!("grid {cols}x{rows} spaced {size}");
        Self {
            points,
            size,
            color,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of columns and rows.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.points.len(), self.points.first().map_or(0, Vec::len))
    }

    /// Look up a cell by lattice index. Out-of-range (including negative)
    /// indices return `None`.
    pub fn get(&self, gx: i64, gy: i64) -> Option<&GridPoint> {
        let gx = usize::try_from(gx).ok()?;
        let gy = usize::try_from(gy).ok()?;
        self.points.get(gx)?.get(gy)
    }

    pub fn set_active(&mut self, gx: usize, gy: usize, active: bool) -> bool {
        match self.points.get_mut(gx).and_then(|col| col.get_mut(gy)) {
            Some(cell) => {
                cell.active = active;
                true
            }
            None => false,
        }
    }

    /// Lattice cell containing a playground position (floor division).
    pub fn cell_of(&self, p: Point) -> (i64, i64) {
        let size = self.size as i64;
        ((p.x as i64).div_euclid(size), (p.y as i64).div_euclid(size))
    }

    /// Recompute every point's `visible` flag against `viewport`.
    ///
    /// Walks every cell; at the default density that is 10k checks per frame.
    pub fn cull(&mut self, viewport: &Viewport) -> usize {
        let mut visible = 0;
        for cell in self.points.iter_mut().flatten() {
            if viewport.mark_visible(&mut cell.point) {
                visible += 1;
            }
        }
        log::trace!("grid cull: {visible} visible");
        visible
    }

    /// Points flagged visible by the last [`Grid::cull`].
    pub fn visible_points(&self) -> impl Iterator<Item = &GridPoint> {
        self.points.iter().flatten().filter(|c| c.point.visible)
    }

    /// Closest lattice point to a playground cursor.
    ///
    /// Only the 2×2 block whose top-left is the cursor's cell is considered.
    /// A cursor sitting exactly on a lattice point snaps to it.
    pub fn nearest(&self, cursor: Point) -> Option<Point> {
        let (gx, gy) = self.cell_of(cursor);
        let mut best: Option<(f64, Point)> = None;

        for dx in 0..2 {
            for dy in 0..2 {
                let Some(cell) = self.get(gx + dx, gy + dy) else {
                    continue;
                };
                let d = distance(cell.point, cursor);
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, cell.point));
                }
            }
        }

        best.map(|(_, p)| Point::new(p.x, p.y))
    }
}

fn cell_count(extent: i32, size: i32) -> usize {
    if extent <= 0 {
        return 0;
    }
    // Smallest n with n * size >= extent.
    ((extent as i64 + size as i64 - 1) / size as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(Playground::default(), 20, Color::BLACK)
    }

    #[test]
    fn default_grid_is_100_by_100() {
        assert_eq!(grid().dimensions(), (100, 100));
    }

    #[test]
    fn existence_matches_extent_invariant() {
        let pg = Playground {
            width: 105,
            height: 60,
        };
        let g = Grid::new(pg, 20, Color::BLACK);
        for gx in -2..10i64 {
            for gy in -2..10i64 {
                let expected =
                    gx >= 0 && gy >= 0 && gx * 20 < pg.width as i64 && gy * 20 < pg.height as i64;
                assert_eq!(g.get(gx, gy).is_some(), expected, "cell ({gx}, {gy})");
            }
        }
    }

    #[test]
    fn exact_lattice_point_snaps_to_itself() {
        let g = grid();
        for k in [0, 1, 7, 99] {
            let p = Point::new(k * 20, k * 20);
            assert_eq!(g.nearest(p), Some(p));
        }
    }

    #[test]
    fn snaps_to_closest_corner_of_cell() {
        let g = grid();
        assert_eq!(g.nearest(Point::new(27, 34)), Some(Point::new(20, 40)));
        assert_eq!(g.nearest(Point::new(39, 21)), Some(Point::new(40, 20)));
    }

    #[test]
    fn ties_keep_first_candidate() {
        // Dead centre of a cell: all four corners are equidistant.
        assert_eq!(grid().nearest(Point::new(30, 30)), Some(Point::new(20, 20)));
    }

    #[test]
    fn edge_cells_skip_missing_neighbours() {
        let g = grid();
        // Last column is x = 1980; x = 2000 does not exist.
        assert_eq!(g.nearest(Point::new(1999, 1999)), Some(Point::new(1980, 1980)));
    }

    #[test]
    fn off_playground_has_no_snap() {
        let g = grid();
        assert_eq!(g.nearest(Point::new(-100, -100)), None);
        assert_eq!(g.nearest(Point::new(5000, 10)), None);
    }

    #[test]
    fn negative_cursor_next_to_origin_snaps_to_origin() {
        // floor(-5 / 20) = -1, so the block (-1..=0) still reaches (0, 0).
        assert_eq!(grid().nearest(Point::new(-5, -5)), Some(Point::ORIGIN));
    }

    #[test]
    fn cull_flags_points_inside_viewport() {
        let mut g = grid();
        let vp = Viewport {
            x: 100,
            y: 100,
            width: 40,
            height: 20,
        };
        // x in {100, 120, 140}, y in {100, 120}
        assert_eq!(g.cull(&vp), 6);
        assert!(g.visible_points().all(|c| vp.contains(c.point)));

        let moved = Viewport { x: 0, y: 0, ..vp };
        g.cull(&moved);
        assert!(g.visible_points().all(|c| c.point.x <= 40));
    }

    #[test]
    fn set_active_rejects_out_of_range() {
        let mut g = grid();
        assert!(g.set_active(3, 4, true));
        assert!(g.get(3, 4).unwrap().active);
        assert!(!g.set_active(100, 0, true));
    }
}
