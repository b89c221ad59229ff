//! Shared value types for the toolkit: geometry, color, view limits, text
//! formats, and the theme record.
//!
//! Everything here is a passive value type. Nothing in this crate draws,
//! measures, or dispatches events.

mod geometry;
mod theme;

pub use geometry::{Point, Rect, Size};
pub use theme::Theme;

use bitflags::bitflags;

bitflags! {
    /// Font style flags. Empty means regular weight, upright.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FontStyle: u8 {
        const BOLD   = 0b01;
        const ITALIC = 0b10;
    }
}

/// A concrete text format: face, size in px, and style flags.
///
/// Faces are identified by name; the backend maps unknown names onto its
/// default proportional family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFormat {
    pub face: &'static str,
    pub size: f32,
    pub style: FontStyle,
}

impl TextFormat {
    pub const fn new(face: &'static str, size: f32) -> Self {
        Self {
            face,
            size,
            style: FontStyle::empty(),
        }
    }

    /// Same face and style at a different size.
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    pub fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }
}

/// Minimum and maximum size an element is willing to take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    pub min: Size,
    pub max: Size,
}

/// Practically-infinite extent for unbounded limits.
pub const FULL_EXTENT: f32 = 1e6;

/// Limits that accept any size.
pub const FULL_LIMITS: ViewLimits = ViewLimits {
    min: Size {
        width: 0.0,
        height: 0.0,
    },
    max: Size {
        width: FULL_EXTENT,
        height: FULL_EXTENT,
    },
};

impl ViewLimits {
    /// Exact-fit limits: min == max == `size`.
    pub const fn fixed(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Clamp a size into these limits.
    pub fn clamp(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min.width, self.max.width),
            height: size.height.clamp(self.min.height, self.max.height),
        }
    }
}

/// RGBA color with components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 0-255 channel values.
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    #[inline]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn opacity(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Scale the RGB channels, clamped to 1.0. `level(1.0)` is identity;
    /// above brightens, below darkens.
    #[inline]
    pub fn level(self, amount: f32) -> Self {
        Self {
            r: (self.r * amount).clamp(0.0, 1.0),
            g: (self.g * amount).clamp(0.0, 1.0),
            b: (self.b * amount).clamp(0.0, 1.0),
            a: self.a,
        }
    }
}
