//! `egui`-backed adapter for measuring text during layout.

use crate::font_id;
use core_types::TextFormat;
use egui::{Color32, Context};
use layout::TextMeasurer;
use std::cell::RefCell;
use std::collections::HashMap;

/// Measures text through egui's font system.
pub struct EguiTextMeasurer {
    ctx: Context,
    space_width_cache: RefCell<HashMap<u32, f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, format: &TextFormat) -> f32 {
        let font_id = font_id(format);

        if text == " " {
            // Color does not affect metrics; cache the space width per size.
            let key = format.size.round().max(0.0) as u32;
            if let Some(w) = self.space_width_cache.borrow().get(&key).copied() {
                return w;
            }

            // NBSP measures most reliably in egui; fall back to a difference
            // measurement, then to a fraction of the font size.
            let nbsp = "\u{00A0}";
            let w_nbsp = self.ctx.fonts(|f| {
                f.layout_no_wrap(nbsp.to_owned(), font_id.clone(), Color32::WHITE)
                    .rect
                    .width()
            });

            let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
                w_nbsp
            } else {
                let w_with = self.ctx.fonts(|f| {
                    f.layout_no_wrap(format!("x{nbsp}x"), font_id.clone(), Color32::WHITE)
                        .rect
                        .width()
                });
                let w_without = self.ctx.fonts(|f| {
                    f.layout_no_wrap("xx".to_owned(), font_id.clone(), Color32::WHITE)
                        .rect
                        .width()
                });
                let w = (w_with - w_without).max(0.0);

                if w.is_finite() && w > 0.0 {
                    w
                } else {
                    (format.size * 0.33).max(1.0)
                }
            };

            self.space_width_cache.borrow_mut().insert(key, w);
            return w;
        }

        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id, Color32::WHITE)
                .rect
                .width()
        })
    }

    fn line_height(&self, format: &TextFormat) -> f32 {
        format.size * 1.2
    }
}
