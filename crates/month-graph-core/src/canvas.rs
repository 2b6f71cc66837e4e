// File: crates/month-graph-core/src/canvas.rs
// Summary: Backend-agnostic drawing surface trait plus a recording implementation.

use crate::geometry::{PointF, RectF};

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    /// Prefer tabular digits (value labels).
    pub mono_numeric: bool,
}

/// Drawing capability consumed by [`crate::render`]. Coordinates are pixels
/// with the origin at the top-left; text is positioned by its baseline.
pub trait Canvas {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (i32, i32);
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: PointF, to: PointF, stroke: &Stroke);
    fn fill_rect(&mut self, rect: RectF, color: Color);
    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle);

    /// Advance width of `text` in pixels. The default is an estimate for
    /// backends without a shaper.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * 0.6
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { from: PointF, to: PointF, stroke: Stroke },
    Rect { rect: RectF, color: Color },
    Text { text: String, at: PointF, style: TextStyle },
}

/// Canvas that records every call; used for tests and headless inspection.
#[derive(Clone, Debug)]
pub struct Recorder {
    width: i32,
    height: i32,
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<RectF> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn lines_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { stroke, .. } if stroke.color == color))
            .count()
    }
}

impl Canvas for Recorder {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, style: *style });
    }
}
