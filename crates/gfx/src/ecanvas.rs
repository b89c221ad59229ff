//! `Canvas` implementation over an `egui::Painter`.

use crate::{color32, font_id};
use canvas::{Canvas, TextAlign};
use core_types::{Color, Point, Rect, TextFormat};
use egui::epaint::PathStroke;
use egui::{Align, Align2, Color32, FontId, Pos2, Shape, Stroke, StrokeKind};

#[derive(Clone)]
struct CanvasState {
    fill: Color32,
    stroke: Color32,
    line_width: f32,
    font: FontId,
    align: Align2,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill: Color32::WHITE,
            stroke: Color32::WHITE,
            line_width: 1.0,
            font: FontId::proportional(14.0),
            align: Align2::LEFT_TOP,
        }
    }
}

enum PathCmd {
    Move(Pos2),
    Line(Pos2),
    Rect(egui::Rect),
    RoundRect(egui::Rect, f32),
}

/// Paints the toolkit's canvas calls as epaint shapes.
///
/// Coordinates are offset by `origin` so a view can render into any region
/// of an egui layer. Path support covers what the drawing code emits: rects,
/// rounded rects, and open polylines; free-form polylines are filled as
/// convex polygons.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    state: CanvasState,
    stack: Vec<CanvasState>,
    path: Vec<PathCmd>,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            state: CanvasState::default(),
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2 {
            x: self.origin.x + p.x,
            y: self.origin.y + p.y,
        }
    }

    fn erect(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.pos(Point::new(r.x, r.y)),
            egui::Vec2 {
                x: r.width.max(0.0),
                y: r.height.max(0.0),
            },
        )
    }

    /// Points of the pending polyline, if the path is made of move/line
    /// segments.
    fn polyline(&self) -> Vec<Pos2> {
        self.path
            .iter()
            .filter_map(|c| match c {
                PathCmd::Move(p) | PathCmd::Line(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_style(&mut self, color: Color) {
        self.state.fill = color32(color);
    }

    fn stroke_style(&mut self, color: Color) {
        self.state.stroke = color32(color);
    }

    fn line_width(&mut self, width: f32) {
        self.state.line_width = width.max(0.0);
    }

    fn font(&mut self, format: &TextFormat) {
        self.state.font = font_id(format);
    }

    fn text_align(&mut self, align: TextAlign) {
        let h = if align.contains(TextAlign::CENTER) {
            Align::Center
        } else if align.contains(TextAlign::RIGHT) {
            Align::Max
        } else {
            Align::Min
        };
        let v = if align.contains(TextAlign::MIDDLE) {
            Align::Center
        } else if align.contains(TextAlign::BOTTOM) {
            Align::Max
        } else {
            Align::Min
        };
        self.state.align = Align2([h, v]);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        let p = self.pos(p);
        self.path.push(PathCmd::Move(p));
    }

    fn line_to(&mut self, p: Point) {
        let p = self.pos(p);
        self.path.push(PathCmd::Line(p));
    }

    fn rect(&mut self, r: Rect) {
        let r = self.erect(r);
        self.path.push(PathCmd::Rect(r));
    }

    fn round_rect(&mut self, r: Rect, radius: f32) {
        let r = self.erect(r);
        self.path.push(PathCmd::RoundRect(r, radius.max(0.0)));
    }

    fn fill(&mut self) {
        let fill = self.state.fill;
        let polyline = self.polyline();

        for cmd in self.path.drain(..) {
            match cmd {
                PathCmd::Rect(r) => self.painter.rect_filled(r, 0.0, fill),
                PathCmd::RoundRect(r, radius) => self.painter.rect_filled(r, radius, fill),
                PathCmd::Move(_) | PathCmd::Line(_) => continue,
            };
        }

        if polyline.len() >= 3 {
            self.painter
                .add(Shape::convex_polygon(polyline, fill, Stroke::NONE));
        }
    }

    fn stroke(&mut self) {
        let stroke = Stroke::new(self.state.line_width, self.state.stroke);
        let polyline = self.polyline();

        for cmd in self.path.drain(..) {
            match cmd {
                PathCmd::Rect(r) => {
                    self.painter.rect_stroke(r, 0.0, stroke, StrokeKind::Middle);
                }
                PathCmd::RoundRect(r, radius) => {
                    self.painter
                        .rect_stroke(r, radius, stroke, StrokeKind::Middle);
                }
                PathCmd::Move(_) | PathCmd::Line(_) => continue,
            }
        }

        if polyline.len() >= 2 {
            self.painter
                .add(Shape::line(polyline, PathStroke::from(stroke)));
        }
    }

    fn fill_text(&mut self, p: Point, text: &str) {
        self.painter.text(
            self.pos(p),
            self.state.align,
            text,
            self.state.font.clone(),
            self.state.fill,
        );
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }
}
