//! Row-layout caching keyed on wrap width, font size, and buffer revision.

use crate::TextMeasurer;
use crate::rows::{GlyphRow, layout_rows};
use core_types::TextFormat;

/// Cached word-wrap result for one text element.
///
/// Rebuilding rows is the expensive part of text editing (it re-measures the
/// buffer), so the cache is only invalidated when something that affects
/// wrapping changes: the wrap width (word-wrap is width-dependent), the font
/// size, or the buffer revision. Width comparisons tolerate sub-pixel jitter.
#[derive(Clone, Debug, Default)]
pub struct RowCache {
    rows: Vec<GlyphRow>,
    wrap_width: f32,
    font_size: f32,
    revision: u64,
    valid: bool,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a rebuild on the next [`ensure`](Self::ensure).
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Whether the cache matches the given inputs.
    pub fn is_valid_for(&self, wrap_width: f32, font_size: f32, revision: u64) -> bool {
        self.valid
            && (self.wrap_width - wrap_width).abs() <= 0.5
            && (self.font_size - font_size).abs() <= 0.01
            && self.revision == revision
    }

    /// The cached rows, rebuilt if width, font size, or revision changed.
    pub fn ensure(
        &mut self,
        measurer: &dyn TextMeasurer,
        format: &TextFormat,
        wrap_width: f32,
        text: &str,
        revision: u64,
    ) -> &[GlyphRow] {
        let wrap_width = wrap_width.max(0.0);

        if !self.is_valid_for(wrap_width, format.size, revision) {
            self.rows = layout_rows(measurer, format, wrap_width, text);
            self.wrap_width = wrap_width;
            self.font_size = format.size;
            self.revision = revision;
            self.valid = true;
        }

        &self.rows
    }

    /// The rows from the last rebuild, without validation. Empty before the
    /// first [`ensure`](Self::ensure).
    pub fn rows(&self) -> &[GlyphRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedMeasurer;

    const FMT: TextFormat = TextFormat::new("test", 14.0);
    const M: FixedMeasurer = FixedMeasurer {
        advance: 10.0,
        line_h: 16.0,
    };

    #[test]
    fn same_inputs_do_not_rebuild() {
        let mut cache = RowCache::new();
        cache.ensure(&M, &FMT, 60.0, "hello world", 0);
        assert!(cache.is_valid_for(60.0, FMT.size, 0));

        // Sub-pixel width jitter stays valid.
        assert!(cache.is_valid_for(60.4, FMT.size, 0));
    }

    #[test]
    fn width_change_invalidates_and_rewraps() {
        let mut cache = RowCache::new();
        let wide = cache.ensure(&M, &FMT, 200.0, "hello world", 0).len();
        assert_eq!(wide, 1);

        assert!(!cache.is_valid_for(60.0, FMT.size, 0));
        let narrow = cache.ensure(&M, &FMT, 60.0, "hello world", 0).len();
        assert_eq!(narrow, 2, "narrower width must re-wrap, not reuse rows");
    }

    #[test]
    fn revision_change_invalidates() {
        let mut cache = RowCache::new();
        cache.ensure(&M, &FMT, 200.0, "ab", 0);
        assert!(!cache.is_valid_for(200.0, FMT.size, 1));

        let rows = cache.ensure(&M, &FMT, 200.0, "abcd", 1);
        assert_eq!(rows[0].end, 4);
    }

    #[test]
    fn font_size_change_invalidates() {
        let mut cache = RowCache::new();
        cache.ensure(&M, &FMT, 200.0, "ab", 0);
        assert!(!cache.is_valid_for(200.0, 20.0, 0));
    }

    #[test]
    fn explicit_invalidate_forces_rebuild() {
        let mut cache = RowCache::new();
        cache.ensure(&M, &FMT, 200.0, "ab", 0);
        cache.invalidate();
        assert!(!cache.is_valid_for(200.0, FMT.size, 0));
    }
}
