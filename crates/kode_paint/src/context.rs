//! Paint context - the drawing API widgets paint against

use crate::color::Color;
use crate::primitives::Point;

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// Drawing surface supplied by the host renderer.
///
/// Coordinates are in pixels with the y axis pointing down. Text is
/// anchored at the left end of its baseline.
pub trait DrawContext {
    /// Stroke a straight line from `from` to `to`
    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Draw a text run whose baseline starts at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color);
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    Text {
        text: String,
        origin: Point,
        size: f32,
        color: Color,
    },
}

/// Records draw calls so they can be replayed by a renderer or inspected
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded lines, in draw order
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Line { from, to, style } => Some((*from, *to, style)),
            PaintCommand::Text { .. } => None,
        })
    }

    /// Recorded text runs, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Color)> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Text {
                text,
                origin,
                color,
                ..
            } => Some((text.as_str(), *origin, *color)),
            PaintCommand::Line { .. } => None,
        })
    }
}

impl DrawContext for PaintContext {
    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.commands.push(PaintCommand::Line {
            from,
            to,
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color) {
        self.commands.push(PaintCommand::Text {
            text: text.to_owned(),
            origin,
            size,
            color,
        });
    }
}
