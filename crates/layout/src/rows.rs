//! Word-wrapped glyph rows.

use crate::TextMeasurer;
use core_types::{Rect, TextFormat};

/// One laid-out visual line of text.
///
/// `start..end` is the byte range of the source buffer shown on this row,
/// excluding any terminating `'\n'`. For soft-wrapped rows, one row's `end`
/// equals the next row's `start`.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRow {
    /// Row box in text-local coordinates (origin at the paragraph's top
    /// left, y grows downward).
    pub rect: Rect,
    pub start: usize,
    pub end: usize,
}

impl GlyphRow {
    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Break `text` into rows at hard newlines and, when `wrap_width` is
/// positive and finite, greedily at word boundaries.
///
/// Words longer than the wrap width fall back to per-character breaking.
/// An empty buffer still yields one empty row, and a trailing newline yields
/// a trailing empty row, so the caret always has a row to live on.
pub fn layout_rows(
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    wrap_width: f32,
    text: &str,
) -> Vec<GlyphRow> {
    let line_h = measurer.line_height(format).max(1.0);
    let wrapping = wrap_width.is_finite() && wrap_width > 0.0;

    let mut rows = Vec::new();
    let mut y = 0.0;

    let mut push_row = |rows: &mut Vec<GlyphRow>, y: &mut f32, start: usize, end: usize| {
        let width = measurer.measure(&text[start..end], format).max(0.0);
        rows.push(GlyphRow {
            rect: Rect::new(0.0, *y, width, line_h),
            start,
            end,
        });
        *y += line_h;
    };

    let mut line_start = 0usize;
    loop {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());

        if !wrapping {
            push_row(&mut rows, &mut y, line_start, line_end);
        } else {
            wrap_line(
                measurer,
                format,
                wrap_width,
                text,
                (line_start, line_end),
                |start, end| push_row(&mut rows, &mut y, start, end),
            );
        }

        if line_end >= text.len() {
            break;
        }
        line_start = line_end + 1; // skip '\n'
    }

    rows
}

/// Greedy word-wrap of one hard line, emitting sub-ranges via `emit`.
fn wrap_line(
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    wrap_width: f32,
    text: &str,
    (line_start, line_end): (usize, usize),
    mut emit: impl FnMut(usize, usize),
) {
    let line = &text[line_start..line_end];
    if line.is_empty() {
        emit(line_start, line_end);
        return;
    }

    let mut row_start = line_start;
    // Break opportunity: the start of the most recent word on this row.
    let mut word_start: Option<usize> = None;
    let mut prev_was_ws = true;

    let mut iter = line.char_indices().peekable();
    while let Some((off, ch)) = iter.next() {
        let at = line_start + off;
        let after = at + ch.len_utf8();

        if !ch.is_whitespace() && prev_was_ws && at > row_start {
            word_start = Some(at);
        }
        prev_was_ws = ch.is_whitespace();

        let width = measurer.measure(&text[row_start..after], format);
        if width > wrap_width && after > row_start {
            // Prefer breaking before the current word; otherwise break
            // before this character (overlong word), keeping at least one
            // character per row.
            let brk = match word_start {
                Some(ws) if ws > row_start && !ch.is_whitespace() => ws,
                _ if at > row_start => at,
                _ => after,
            };

            if brk < after || iter.peek().is_some() {
                emit(row_start, brk);
                row_start = brk;
                word_start = None;
                // Anything before the new row start has been emitted; the
                // current character may itself still overflow and will be
                // re-measured against the new row on the next iteration.
                if brk > at {
                    prev_was_ws = ch.is_whitespace();
                }
            }
        }
    }

    emit(row_start, line_end);
}

/// Total laid-out height; an empty row list falls back to one line.
pub fn text_height(rows: &[GlyphRow], fallback_line_h: f32) -> f32 {
    rows.last()
        .map(|r| (r.rect.y + r.rect.height).max(0.0))
        .unwrap_or_else(|| fallback_line_h.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedMeasurer;
    use core_types::TextFormat;

    const FMT: TextFormat = TextFormat::new("test", 14.0);

    fn rows(text: &str, wrap: f32) -> Vec<GlyphRow> {
        layout_rows(&FixedMeasurer::default(), &FMT, wrap, text)
    }

    fn ranges(rows: &[GlyphRow]) -> Vec<(usize, usize)> {
        rows.iter().map(|r| (r.start, r.end)).collect()
    }

    #[test]
    fn empty_text_yields_one_empty_row() {
        let r = rows("", 100.0);
        assert_eq!(ranges(&r), vec![(0, 0)]);
        assert_eq!(r[0].rect.y, 0.0);
    }

    #[test]
    fn no_wrap_splits_on_hard_newlines_only() {
        let r = rows("ab\ncd", 0.0);
        assert_eq!(ranges(&r), vec![(0, 2), (3, 5)]);
        assert_eq!(r[1].rect.y, 16.0);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_row() {
        let r = rows("ab\n", 0.0);
        assert_eq!(ranges(&r), vec![(0, 2), (3, 3)]);
    }

    #[test]
    fn wraps_before_a_word_that_does_not_fit() {
        // 10px per char, width 60: "hello " fits, "world" wraps.
        let r = rows("hello world", 60.0);
        assert_eq!(ranges(&r), vec![(0, 6), (6, 11)]);
        assert_eq!(r[0].rect.y, 0.0);
        assert_eq!(r[1].rect.y, 16.0);
    }

    #[test]
    fn narrower_width_produces_more_rows() {
        let wide = rows("one two three", 80.0);
        let narrow = rows("one two three", 40.0);
        assert!(narrow.len() > wide.len());

        // Every byte of the text is covered in order.
        let mut pos = 0;
        for (s, e) in ranges(&narrow) {
            assert_eq!(s, pos);
            assert!(e >= s);
            pos = e;
        }
        assert_eq!(pos, "one two three".len());
    }

    #[test]
    fn overlong_word_breaks_per_character() {
        // Width 30 = 3 chars; a 7-char word must split.
        let r = rows("abcdefg", 30.0);
        assert_eq!(ranges(&r), vec![(0, 3), (3, 6), (6, 7)]);
    }

    #[test]
    fn single_char_wider_than_width_still_gets_a_row() {
        let r = rows("ab", 5.0);
        assert_eq!(ranges(&r), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn wrap_ranges_are_char_boundaries_for_multibyte() {
        let text = "€€€ €€€";
        let r = rows(text, 30.0);
        for (s, e) in ranges(&r) {
            assert!(text.is_char_boundary(s));
            assert!(text.is_char_boundary(e));
        }
    }

    #[test]
    fn text_height_counts_rows() {
        let r = rows("a\nb\nc", 0.0);
        assert_eq!(text_height(&r, 16.0), 48.0);
        assert_eq!(text_height(&[], 16.0), 16.0);
    }

    #[test]
    fn row_widths_are_measured() {
        let r = rows("hello", 0.0);
        assert_eq!(r[0].rect.width, 50.0);
    }
}
