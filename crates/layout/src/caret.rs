//! Caret geometry and hit-testing over laid-out rows.

use crate::TextMeasurer;
use crate::rows::GlyphRow;
use core_types::{Point, TextFormat};
use edit_core::{EditState, clamp_to_char_boundary, nearest_boundary_for_x};

/// Index of the row the caret sits on.
///
/// A caret at a soft-wrap boundary belongs to the following row, so typing
/// continues at the start of the wrapped line.
pub fn row_index_for_caret(rows: &[GlyphRow], caret: usize) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let i = rows.partition_point(|r| r.start <= caret);
    i.saturating_sub(1).min(rows.len() - 1)
}

/// Index of the row at a y-coordinate in text-local space.
///
/// Coordinates above the first row resolve to row 0, below the last to the
/// last row.
pub fn row_index_from_y(rows: &[GlyphRow], y_in_text: f32) -> usize {
    if rows.is_empty() {
        return 0;
    }

    let y = y_in_text.max(0.0);
    for (i, row) in rows.iter().enumerate() {
        if y < row.rect.y + row.rect.height.max(1.0) {
            return i;
        }
    }
    rows.len() - 1
}

/// X position of a byte index within its row, in text-local coordinates.
pub fn x_for_index(
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    text: &str,
    row: &GlyphRow,
    index: usize,
) -> f32 {
    let index = clamp_to_char_boundary(text, index).clamp(row.start, row.end);
    measurer.measure(&text[row.start..index], format).max(0.0)
}

/// The byte offset nearest to a point in text-local coordinates.
///
/// Picks the row from `p.y`, then the nearest caret boundary from `p.x`
/// (half-glyph tie-breaking).
pub fn caret_from_point(
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    text: &str,
    rows: &[GlyphRow],
    p: Point,
) -> usize {
    if rows.is_empty() {
        return 0;
    }

    let row = &rows[row_index_from_y(rows, p.y)];
    nearest_boundary_for_x(text, (row.start, row.end), p.x.max(0.0), |s| {
        measurer.measure(s, format)
    })
}

/// Caret `(x, y, height)` in text-local coordinates.
pub fn caret_geometry(
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    text: &str,
    rows: &[GlyphRow],
    caret: usize,
) -> (f32, f32, f32) {
    let line_h = measurer.line_height(format);
    if rows.is_empty() {
        return (0.0, 0.0, line_h);
    }

    let caret = clamp_to_char_boundary(text, caret);
    let row = &rows[row_index_for_caret(rows, caret)];
    let x = x_for_index(measurer, format, text, row, caret);
    (x, row.rect.y, row.rect.height.max(line_h))
}

/// Move the caret `delta` rows up (negative) or down (positive), keeping the
/// intended horizontal column stable across rows of different lengths.
///
/// `preferred_x` is the column from a previous vertical move, if any; the
/// return value is the column to carry into the next one. While selecting,
/// moving past the first/last row clamps to that row's start/end.
pub fn move_vertically(
    edit: &mut EditState,
    rows: &[GlyphRow],
    measurer: &dyn TextMeasurer,
    format: &TextFormat,
    delta: i32,
    preferred_x: Option<f32>,
    selecting: bool,
) -> Option<f32> {
    if delta == 0 || rows.is_empty() {
        return preferred_x;
    }

    let caret = clamp_to_char_boundary(edit.text(), edit.caret());
    let x = preferred_x.unwrap_or_else(|| {
        let (x, _y, _h) = caret_geometry(measurer, format, edit.text(), rows, caret);
        x
    });

    let cur = row_index_for_caret(rows, caret);
    let last = rows.len() - 1;

    if selecting {
        if delta < 0 && cur == 0 {
            let start = rows[0].start;
            edit.set_caret(start, true);
            return Some(x.max(0.0));
        }
        if delta > 0 && cur == last {
            let end = rows[last].end;
            edit.set_caret(end, true);
            return Some(x.max(0.0));
        }
    }

    let target = if delta < 0 {
        cur.saturating_sub((-delta) as usize)
    } else {
        (cur + delta as usize).min(last)
    };

    let row = &rows[target];
    let new_caret = nearest_boundary_for_x(edit.text(), (row.start, row.end), x.max(0.0), |s| {
        measurer.measure(s, format)
    });
    edit.set_caret(new_caret, selecting);

    Some(x.max(0.0))
}
