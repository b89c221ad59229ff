//! A canvas that records draw commands instead of painting.

use crate::{Canvas, TextAlign};
use core_types::{Color, Point, Rect, TextFormat};

/// One recorded canvas operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    FillStyle(Color),
    StrokeStyle(Color),
    LineWidth(f32),
    Font(TextFormat),
    TextAlign(TextAlign),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    PathRect(Rect),
    PathRoundRect(Rect, f32),
    Fill,
    Stroke,
    FillText(Point, String),
    Save,
    Restore,
}

/// Records every canvas call for assertions in tests; paints nothing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCmd>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// All strings painted through `fill_text`, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillText(_, s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_style(&mut self, color: Color) {
        self.commands.push(DrawCmd::FillStyle(color));
    }

    fn stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCmd::StrokeStyle(color));
    }

    fn line_width(&mut self, width: f32) {
        self.commands.push(DrawCmd::LineWidth(width));
    }

    fn font(&mut self, format: &TextFormat) {
        self.commands.push(DrawCmd::Font(*format));
    }

    fn text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCmd::TextAlign(align));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCmd::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCmd::LineTo(p));
    }

    fn rect(&mut self, r: Rect) {
        self.commands.push(DrawCmd::PathRect(r));
    }

    fn round_rect(&mut self, r: Rect, radius: f32) {
        self.commands.push(DrawCmd::PathRoundRect(r, radius));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCmd::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCmd::Stroke);
    }

    fn fill_text(&mut self, p: Point, text: &str) {
        self.commands.push(DrawCmd::FillText(p, text.to_owned()));
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_convenience_shapes() {
        let mut cnv = RecordingCanvas::new();
        cnv.fill_style(Color::WHITE);
        cnv.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(
            cnv.commands(),
            &[
                DrawCmd::FillStyle(Color::WHITE),
                DrawCmd::BeginPath,
                DrawCmd::PathRect(Rect::new(0.0, 0.0, 10.0, 10.0)),
                DrawCmd::Fill,
            ]
        );
    }

    #[test]
    fn texts_collects_painted_strings() {
        let mut cnv = RecordingCanvas::new();
        cnv.fill_text(Point::ORIGIN, "a");
        cnv.fill_text(Point::ORIGIN, "b");
        assert_eq!(cnv.texts(), vec!["a", "b"]);
    }
}
