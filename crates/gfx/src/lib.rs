//! egui/epaint backend for the toolkit's external contracts.
//!
//! The core consumes a canvas, a glyph-layout service, and a clipboard
//! through traits; this crate supplies the production implementations:
//! [`EguiCanvas`] paints through an `egui::Painter`, [`EguiTextMeasurer`]
//! measures through egui's font system, [`SystemClipboard`] wraps the
//! platform clipboard, and [`events`] translates egui input events into the
//! host vocabulary.

mod clipboard;
mod ecanvas;
pub mod events;
mod text_measurer;

pub use clipboard::SystemClipboard;
pub use ecanvas::EguiCanvas;
pub use text_measurer::EguiTextMeasurer;

use core_types::{Color, TextFormat};
use egui::{Color32, FontFamily, FontId};

pub(crate) fn color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c.r.clamp(0.0, 1.0) * 255.0) as u8,
        (c.g.clamp(0.0, 1.0) * 255.0) as u8,
        (c.b.clamp(0.0, 1.0) * 255.0) as u8,
        (c.a.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Map a toolkit text format onto an egui font.
///
/// egui panics on unregistered family names, so unknown faces fall back to
/// the proportional family; only an explicit "monospace" face selects the
/// monospace one.
pub(crate) fn font_id(format: &TextFormat) -> FontId {
    let family = if format.face.eq_ignore_ascii_case("monospace") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    };
    FontId::new(format.size, family)
}
