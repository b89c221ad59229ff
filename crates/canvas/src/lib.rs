//! The canvas contract consumed by drawing code, plus shared helpers.
//!
//! The toolkit does not implement vector rasterization; it draws through
//! this trait and leaves the primitives to a backend (see the `gfx` crate
//! for the production implementation and [`RecordingCanvas`] for tests).
//!
//! The model is a stateful 2D context: style setters apply to subsequent
//! `fill`/`stroke` calls, paths accumulate between `begin_path` and the next
//! paint, and `save`/`restore` scope style state.

mod draw;
mod recording;

pub use draw::{draw_box_vgradient, draw_button_body, draw_icon, draw_menu_background, draw_panel};
pub use recording::{DrawCmd, RecordingCanvas};

use bitflags::bitflags;
use core_types::{Color, Point, Rect, TextFormat};

bitflags! {
    /// Anchoring for [`Canvas::fill_text`]: one horizontal flag (left /
    /// center / right of the anchor point) and one vertical (top / middle /
    /// bottom). Empty means left + baseline.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TextAlign: u8 {
        const LEFT   = 0b000001;
        const CENTER = 0b000010;
        const RIGHT  = 0b000100;
        const TOP    = 0b001000;
        const MIDDLE = 0b010000;
        const BOTTOM = 0b100000;
    }
}

/// A stateful 2D drawing surface.
pub trait Canvas {
    fn fill_style(&mut self, color: Color);
    fn stroke_style(&mut self, color: Color);
    fn line_width(&mut self, width: f32);
    fn font(&mut self, format: &TextFormat);
    fn text_align(&mut self, align: TextAlign);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn rect(&mut self, r: Rect);
    fn round_rect(&mut self, r: Rect, radius: f32);

    /// Paint the accumulated path with the fill style and clear it.
    fn fill(&mut self);

    /// Outline the accumulated path with the stroke style and clear it.
    fn stroke(&mut self);

    /// Paint `text` anchored at `p` per the current font and alignment.
    fn fill_text(&mut self, p: Point, text: &str);

    /// Push the current style state (fill, stroke, width, font, alignment).
    fn save(&mut self);

    /// Pop back to the most recently saved style state.
    fn restore(&mut self);

    // Convenience single-shot shapes.

    fn fill_rect(&mut self, r: Rect) {
        self.begin_path();
        self.rect(r);
        self.fill();
    }

    fn fill_round_rect(&mut self, r: Rect, radius: f32) {
        self.begin_path();
        self.round_rect(r, radius);
        self.fill();
    }

    fn stroke_rect(&mut self, r: Rect) {
        self.begin_path();
        self.rect(r);
        self.stroke();
    }

    fn stroke_round_rect(&mut self, r: Rect, radius: f32) {
        self.begin_path();
        self.round_rect(r, radius);
        self.stroke();
    }

    fn line(&mut self, from: Point, to: Point) {
        self.begin_path();
        self.move_to(from);
        self.line_to(to);
        self.stroke();
    }
}
