//! Headless surface that records every call.
//!
//! Used by tests and by anything that needs to inspect a frame without a
//! real canvas. Text is measured with [`ApproxMeasure`].

use crate::surface::{CursorStyle, Surface};
use mm_core::{ApproxMeasure, Color, FontSpec, TextMeasure};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    /// CSS font shorthand.
    Font(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    ClosePath,
    Fill,
    Stroke,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
    Cursor(CursorStyle),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
    cursor: CursorStyle,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the log, e.g. between frames.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Cursor most recently set.
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl TextMeasure for RecordingSurface {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        ApproxMeasure.text_width(text, font)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.ops.push(DrawOp::Font(font.css()));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::QuadTo(cx, cy, x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
        self.ops.push(DrawOp::Cursor(cursor));
    }
}
