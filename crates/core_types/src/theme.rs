//! The theme record: fonts, sizes, and colors queried by drawing code.
//!
//! The theme is a plain value injected through the draw/layout contexts. It
//! is read during rendering and mutated only between events (the view owns
//! it); there is no process-wide global.

use crate::{Color, FontStyle, TextFormat};

#[derive(Clone, Debug)]
pub struct Theme {
    pub panel_color: Color,
    pub frame_color: Color,
    pub frame_corner_radius: f32,
    pub frame_stroke_width: f32,

    pub default_button_color: Color,
    pub button_corner_radius: f32,

    pub heading_font: TextFormat,
    pub heading_font_color: Color,

    pub label_font: TextFormat,
    pub label_font_color: Color,

    pub icon_font: TextFormat,
    pub icon_color: Color,

    pub text_box_font: TextFormat,
    pub text_box_font_color: Color,
    pub edit_box_fill_color: Color,
    pub inactive_font_color: Color,
    pub selection_color: Color,
    pub caret_color: Color,
    pub caret_width: f32,

    pub indicator_color: Color,

    pub major_grid_color: Color,
    pub major_grid_width: f32,
    pub minor_grid_color: Color,
    pub minor_grid_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_color: Color::rgba(0.11, 0.12, 0.15, 1.0),
            frame_color: Color::rgba(0.45, 0.47, 0.50, 1.0),
            frame_corner_radius: 3.0,
            frame_stroke_width: 0.8,

            default_button_color: Color::rgba(0.25, 0.26, 0.30, 1.0),
            button_corner_radius: 4.0,

            heading_font: TextFormat::new("Open Sans", 14.0).with_style(FontStyle::BOLD),
            heading_font_color: Color::rgba(0.86, 0.86, 0.86, 1.0),

            label_font: TextFormat::new("Open Sans", 14.0),
            label_font_color: Color::rgba(0.86, 0.86, 0.86, 1.0),

            icon_font: TextFormat::new("lumen-icons", 16.0),
            icon_color: Color::rgba(0.86, 0.86, 0.86, 1.0),

            text_box_font: TextFormat::new("Open Sans", 14.0),
            text_box_font_color: Color::rgba(0.86, 0.86, 0.86, 1.0),
            edit_box_fill_color: Color::rgba(0.17, 0.18, 0.21, 1.0),
            inactive_font_color: Color::rgba(0.5, 0.5, 0.5, 1.0),
            selection_color: Color::rgba(0.3, 0.5, 0.8, 0.4),
            caret_color: Color::rgba(0.9, 0.9, 0.9, 1.0),
            caret_width: 1.2,

            indicator_color: Color::rgba(0.0, 0.6, 0.25, 1.0),

            major_grid_color: Color::rgba(0.3, 0.3, 0.3, 1.0),
            major_grid_width: 0.8,
            minor_grid_color: Color::rgba(0.25, 0.25, 0.25, 1.0),
            minor_grid_width: 0.4,
        }
    }
}
