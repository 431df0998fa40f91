//! The drawing surface the paint pass talks to.
//!
//! Modeled on an immediate-mode 2D context: state setters, a current path,
//! and rect/text shortcuts. Coordinates are surface pixels. Surfaces also
//! measure text, since idea boxes are sized from the same font metrics they
//! are painted with.

use mm_core::{Color, FontSpec, TextMeasure};

/// Pointer affordance shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

impl CursorStyle {
    /// CSS `cursor` keyword.
    pub fn css(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
        }
    }
}

pub trait Surface: TextMeasure {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Erase the whole surface.
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &FontSpec);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    /// Fill the current path with the fill color.
    fn fill(&mut self);
    /// Stroke the current path with the stroke color and line width.
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Paint `text` with its baseline-left at `(x, y)` in the fill color.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn set_cursor(&mut self, cursor: CursorStyle);
}
