//! Shared drawing helpers used by the element gallery.
//!
//! The canvas contract has no gradient primitive, so the soft vertical
//! gradients of the reference look are approximated with stacked leveled
//! fills.

use crate::{Canvas, TextAlign};
use core_types::{Color, Rect, TextFormat};

/// A raised panel: filled rounded box with a dark outline below-right.
pub fn draw_panel(cnv: &mut dyn Canvas, bounds: Rect, color: Color, radius: f32) {
    cnv.fill_style(Color::BLACK.opacity(0.4));
    cnv.fill_round_rect(bounds.translate(1.0, 1.0), radius);

    cnv.fill_style(color);
    cnv.fill_round_rect(bounds, radius);

    cnv.stroke_style(Color::BLACK.opacity(0.5));
    cnv.line_width(1.0);
    cnv.stroke_round_rect(bounds, radius);
}

/// Two stacked fills approximating a top-lit vertical gradient.
pub fn draw_box_vgradient(cnv: &mut dyn Canvas, bounds: Rect, color: Color, radius: f32) {
    let top = Rect {
        height: bounds.height / 2.0,
        ..bounds
    };
    let bottom = Rect {
        y: bounds.y + bounds.height / 2.0,
        height: bounds.height / 2.0,
        ..bounds
    };

    cnv.fill_style(color.level(1.2));
    cnv.fill_round_rect(top, radius);
    cnv.fill_style(color.level(0.85));
    cnv.fill_round_rect(bottom, radius);
}

/// A button body: gradient-approximated face plus highlight and shadow
/// outlines.
pub fn draw_button_body(cnv: &mut dyn Canvas, bounds: Rect, color: Color, radius: f32) {
    draw_box_vgradient(cnv, bounds, color, radius);

    cnv.line_width(1.0);
    cnv.stroke_style(Color::WHITE.opacity(0.25));
    cnv.stroke_round_rect(bounds.inset(1.0, 1.0), radius - 0.5);

    cnv.stroke_style(Color::BLACK.opacity(0.4));
    cnv.stroke_round_rect(bounds, radius);
}

/// Paint an icon glyph centered in `bounds`.
///
/// `code` is a codepoint in the icon font; invalid codepoints are ignored.
pub fn draw_icon(cnv: &mut dyn Canvas, bounds: Rect, code: u32, format: &TextFormat, color: Color) {
    let Some(ch) = char::from_u32(code) else {
        return;
    };

    let mut buf = [0u8; 4];
    let glyph: &str = ch.encode_utf8(&mut buf);

    cnv.save();
    cnv.fill_style(color);
    cnv.font(format);
    cnv.text_align(TextAlign::CENTER | TextAlign::MIDDLE);
    cnv.fill_text(bounds.center(), glyph);
    cnv.restore();
}

/// A drop-down / menu backdrop: translucent rounded panel with rounded
/// bottom corners emphasized.
pub fn draw_menu_background(cnv: &mut dyn Canvas, bounds: Rect, color: Color, radius: f32) {
    cnv.fill_style(color.opacity(0.95));
    cnv.fill_round_rect(bounds, radius);
}
