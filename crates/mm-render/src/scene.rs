//! Vello backend: turns surface calls into a `vello::Scene`.
//!
//! The current path is accumulated as a kurbo `BezPath` and flushed on
//! `fill`/`stroke`. The caller presents the scene. Text is not shaped yet;
//! glyph runs need a font context, so labels are only logged.

use crate::surface::{CursorStyle, Surface};
use kurbo::{Affine, BezPath, Rect, Stroke};
use mm_core::{ApproxMeasure, FontSpec, TextMeasure};
use peniko::{Color, Fill};
use vello::Scene;

pub struct SceneSurface {
    scene: Scene,
    width: f64,
    height: f64,
    fill: Color,
    stroke: Color,
    line_width: f64,
    font: FontSpec,
    path: BezPath,
    cursor: CursorStyle,
}

impl SceneSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scene: Scene::new(),
            width,
            height,
            fill: Color::from_rgba8(0, 0, 0, 0xff),
            stroke: Color::from_rgba8(0, 0, 0, 0xff),
            line_width: 1.0,
            font: FontSpec::default(),
            path: BezPath::new(),
            cursor: CursorStyle::Default,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }
}

fn to_peniko(c: mm_core::Color) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

impl TextMeasure for SceneSurface {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        ApproxMeasure.text_width(text, font)
    }
}

impl Surface for SceneSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.scene.reset();
        self.path.truncate(0);
    }

    fn set_fill_color(&mut self, color: mm_core::Color) {
        self.fill = to_peniko(color);
    }

    fn set_stroke_color(&mut self, color: mm_core::Color) {
        self.stroke = to_peniko(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn begin_path(&mut self) {
        self.path.truncate(0);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x, y));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.path.quad_to((cx, cy), (x, y));
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn fill(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.fill, None, &self.path);
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() || self.line_width <= 0.0 {
            return;
        }
        let style = Stroke::new(self.line_width);
        self.scene
            .stroke(&style, Affine::IDENTITY, self.stroke, None, &self.path);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = Rect::new(x, y, x + width, y + height);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.fill, None, &rect);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = Rect::new(x, y, x + width, y + height);
        let style = Stroke::new(self.line_width);
        self.scene
            .stroke(&style, Affine::IDENTITY, self.stroke, None, &rect);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        log::trace!("TEXT {text:?} at ({x}, {y}) in {}", self.font.css());
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_state_resets_per_begin() {
        let mut s = SceneSurface::new(100.0, 100.0);
        s.begin_path();
        s.move_to(0.0, 0.0);
        s.line_to(10.0, 10.0);
        s.fill();
        assert_eq!(s.path.elements().len(), 2);
        s.begin_path();
        assert!(s.path.elements().is_empty());
        s.clear();
        s.set_cursor(CursorStyle::Pointer);
        assert_eq!(s.cursor(), CursorStyle::Pointer);
    }
}
