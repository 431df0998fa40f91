//! Idea forest → surface drawing calls.
//!
//! Idea outlines and branch ribbons are built as kurbo paths in surface
//! coordinates and then replayed onto the [`Surface`]. Everything is drawn
//! relative to the viewport origin.

use crate::surface::Surface;
use kurbo::{BezPath, CubicBez, PathEl};
use mm_core::model::{Branch, Idea};
use mm_core::routing::Route;
use mm_core::style::Shape;
use mm_core::{Color, Grid, IdeaId, MindMap, Point, Viewport};

/// Side length of an emphasized grid point.
const ACTIVE_DOT: f64 = 4.0;

/// Tolerance when a cubic segment has to be approximated by quadratics.
const QUAD_ACCURACY: f64 = 0.1;

/// Full frame: clear, grid, then every displayed idea and its branches.
///
/// Culls the grid against `viewport` as a side effect.
pub fn paint_scene(surface: &mut dyn Surface, map: &MindMap, grid: &mut Grid, viewport: &Viewport) {
    surface.clear();
    grid.cull(viewport);
    paint_grid(surface, grid, viewport);
    paint_ideas(surface, map, viewport);
}

// ─── Grid ────────────────────────────────────────────────────────────────────

/// Dots for the points flagged visible by the last cull.
pub fn paint_grid(surface: &mut dyn Surface, grid: &Grid, viewport: &Viewport) {
    surface.set_fill_color(grid.color);
    let mut drawn = 0usize;
    for cell in grid.visible_points() {
        let (x, y) = viewport.to_surface(cell.point).as_f64();
        if cell.active {
            let half = ACTIVE_DOT / 2.0;
            surface.fill_rect(x - half, y - half, ACTIVE_DOT, ACTIVE_DOT);
        } else {
            surface.fill_rect(x, y, 1.0, 1.0);
        }
        drawn += 1;
    }
    log::trace!("grid: {drawn} dots");
}

/// Square outline centered on a grid point, marking where a drop would snap.
pub fn paint_snap_marker(
    surface: &mut dyn Surface,
    point: Point,
    viewport: &Viewport,
    size: i32,
    color: Color,
) {
    let (x, y) = viewport.to_surface(point).as_f64();
    let size = size as f64;
    surface.set_stroke_color(color);
    surface.set_line_width(1.0);
    surface.stroke_rect(x - size / 2.0, y - size / 2.0, size, size);
}

// ─── Ideas and branches ──────────────────────────────────────────────────────

/// Depth-first over the forest: each displayed idea, then its displayed
/// branches. Idea and branch visibility are independent, so a hidden idea
/// still shows the branches leaving it.
pub fn paint_ideas(surface: &mut dyn Surface, map: &MindMap, viewport: &Viewport) {
    for id in map.depth_first() {
        let Some(idea) = map.get(id) else { continue };
        if idea.display {
            paint_idea(surface, idea, viewport);
        }
        paint_branches(surface, map, idea, viewport);
    }
}

/// Repaint the direct children of `id` and the branches leaving it, on top
/// of whatever the surface already shows.
pub fn paint_children(surface: &mut dyn Surface, map: &MindMap, id: IdeaId, viewport: &Viewport) {
    let Some(parent) = map.get(id) else { return };
    for child in map.ideas(Some(id)) {
        if let Some(idea) = map.get(child).filter(|i| i.display) {
            paint_idea(surface, idea, viewport);
        }
    }
    paint_branches(surface, map, parent, viewport);
}

fn paint_branches(surface: &mut dyn Surface, map: &MindMap, idea: &Idea, viewport: &Viewport) {
    for branch in idea.branches.iter().filter(|b| b.display) {
        if let Some(route) = map.route_branch(branch) {
            paint_branch(surface, branch, &route, viewport);
        }
    }
}

pub fn paint_idea(surface: &mut dyn Surface, idea: &Idea, viewport: &Viewport) {
    let style = &idea.style;
    let b = idea.bounds().translated(viewport.origin());
    log::trace!("IDEA {:?} at ({}, {})", idea.text, b.x, b.y);

    let outline = match style.shape {
        Shape::Square => rounded_square(b.x, b.y, b.width, b.height, style.radius),
    };

    surface.set_fill_color(style.fill);
    surface.set_stroke_color(style.border.color);
    surface.set_line_width(style.border.weight.value);
    trace_path(surface, &outline);
    surface.fill();
    surface.stroke();

    surface.set_font(&style.font);
    surface.set_fill_color(style.font.color);
    surface.fill_text(&idea.text, b.x + style.padding, b.y + style.padding);
}

pub fn paint_branch(surface: &mut dyn Surface, branch: &Branch, route: &Route, viewport: &Viewport) {
    let o = viewport.origin();
    let (ox, oy) = (o.x as f64, o.y as f64);
    let start = (route.start.x - ox, route.start.y - oy);
    let end = (route.end.x - ox, route.end.y - oy);

    surface.set_fill_color(branch.color);
    trace_path(surface, &ribbon(start, end, branch.weight));
    surface.fill();
}

// ─── Path builders ───────────────────────────────────────────────────────────

/// Box outline whose corners are quadratic curves pulled toward the box corner.
pub fn rounded_square(x: f64, y: f64, w: f64, h: f64, r: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((x + r, y));
    path.line_to((x + w - r, y));
    path.quad_to((x + w, y), (x + w, y + r));
    path.line_to((x + w, y + h - r));
    path.quad_to((x + w, y + h), (x + w - r, y + h));
    path.line_to((x + r, y + h));
    path.quad_to((x, y + h), (x, y + h - r));
    path.line_to((x, y + r));
    path.quad_to((x, y), (x + r, y));
    path.close_path();
    path
}

/// Tapered connector: out to `end` bowing one way, back to `start` bowing
/// the other, `weight` apart.
pub fn ribbon(start: (f64, f64), end: (f64, f64), weight: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.quad_to((start.0 + weight, end.1 - weight), end);
    path.quad_to((start.0 - weight, end.1 + weight), start);
    path.close_path();
    path
}

/// Replay a kurbo path as a fresh surface path.
pub fn trace_path(surface: &mut dyn Surface, path: &BezPath) {
    surface.begin_path();
    let mut last = kurbo::Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                surface.move_to(p.x, p.y);
                last = p;
            }
            PathEl::LineTo(p) => {
                surface.line_to(p.x, p.y);
                last = p;
            }
            PathEl::QuadTo(c, p) => {
                surface.quad_to(c.x, c.y, p.x, p.y);
                last = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                for (_, _, q) in CubicBez::new(last, c1, c2, p).to_quads(QUAD_ACCURACY) {
                    surface.quad_to(q.p1.x, q.p1.y, q.p2.x, q.p2.y);
                }
                last = p;
            }
            PathEl::ClosePath => surface.close_path(),
        }
    }
}
