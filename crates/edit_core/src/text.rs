//! UTF-8 boundary and word-break utilities for caret handling.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices beyond the string clamp to `s.len()`; indices inside a multi-byte
/// character snap backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use edit_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The previous caret position (character boundary) before `i`, or 0.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// The next caret position (character boundary) after `i`, or `s.len()`.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    match s[i..].chars().next() {
        Some(ch) => i + ch.len_utf8(),
        None => s.len(),
    }
}

/// Default word-break predicate: anything that is not alphanumeric separates
/// words. Operates on Unicode scalar values, so non-ASCII letters count as
/// word characters.
#[inline]
pub fn is_word_break(ch: char) -> bool {
    !ch.is_alphanumeric()
}

/// Default line-break predicate.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n'
}

/// The previous word boundary before `pos`: skips separators backwards, then
/// the word itself, landing on the word's first byte.
pub fn prev_word_boundary(s: &str, pos: usize, is_break: impl Fn(char) -> bool) -> usize {
    let mut i = clamp_to_char_boundary(s, pos);

    while i > 0 {
        let prev = prev_cursor_boundary(s, i);
        let Some(ch) = s[prev..].chars().next() else {
            break;
        };
        if !is_break(ch) {
            break;
        }
        i = prev;
    }

    while i > 0 {
        let prev = prev_cursor_boundary(s, i);
        let Some(ch) = s[prev..].chars().next() else {
            break;
        };
        if is_break(ch) {
            break;
        }
        i = prev;
    }

    i
}

/// The next word boundary after `pos`: skips the rest of the current word,
/// then separators, landing on the next word's first byte (or `s.len()`).
pub fn next_word_boundary(s: &str, pos: usize, is_break: impl Fn(char) -> bool) -> usize {
    let mut i = clamp_to_char_boundary(s, pos);

    while let Some(ch) = s[i..].chars().next() {
        if is_break(ch) {
            break;
        }
        i += ch.len_utf8();
    }

    while let Some(ch) = s[i..].chars().next() {
        if !is_break(ch) {
            break;
        }
        i += ch.len_utf8();
    }

    i
}

/// The byte range of the word under `pos`, used for double-click selection.
///
/// When `pos` sits on a separator, the separator run itself is selected.
pub fn word_range_at(s: &str, pos: usize, is_break: impl Fn(char) -> bool) -> (usize, usize) {
    if s.is_empty() {
        return (0, 0);
    }

    let pos = clamp_to_char_boundary(s, pos);
    // Classify by the character under the caret, falling back to the one
    // before it when the caret sits at the end.
    let probe = if pos < s.len() {
        pos
    } else {
        prev_cursor_boundary(s, pos)
    };
    let Some(at) = s[probe..].chars().next() else {
        return (pos, pos);
    };
    let breaks = is_break(at);

    let mut start = probe;
    while start > 0 {
        let prev = prev_cursor_boundary(s, start);
        let Some(ch) = s[prev..].chars().next() else {
            break;
        };
        if is_break(ch) != breaks {
            break;
        }
        start = prev;
    }

    let mut end = probe;
    while let Some(ch) = s[end..].chars().next() {
        if is_break(ch) != breaks {
            break;
        }
        end += ch.len_utf8();
    }

    (start, end)
}

/// Remove newlines (CR and LF) for single-line fields.
///
/// Borrows when the input has no newlines (the common case).
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// Normalize line endings (CRLF/CR → LF), borrowing when already normalized.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        if ch == '\r' {
            if it.peek() == Some(&'\n') {
                let _ = it.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// The caret boundary within `range` nearest to `x`, where `x` is measured
/// from the start of the range.
///
/// `measure` reports the advance width of a prefix of `s[range.0..i]`, i.e.
/// it is called with slices starting at `range.0`. The result snaps to the
/// nearest boundary: a point past the midpoint of a glyph selects the
/// boundary after it.
pub fn nearest_boundary_for_x(
    s: &str,
    range: (usize, usize),
    x: f32,
    mut measure: impl FnMut(&str) -> f32,
) -> usize {
    let end = clamp_to_char_boundary(s, range.1);
    let start = clamp_to_char_boundary(s, range.0.min(end));
    if start == end {
        return start;
    }

    let x = x.max(0.0);

    // All caret stops inside the range, including both ends.
    let mut boundaries: Vec<usize> = s[start..end].char_indices().map(|(i, _)| start + i).collect();
    boundaries.push(end);

    // Largest boundary whose prefix width fits in x.
    let mut lo = 0usize;
    let mut hi = boundaries.len() - 1;
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        let w = measure(&s[start..boundaries[mid]]).max(0.0);
        if w <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    let left = boundaries[lo];
    let left_w = measure(&s[start..left]).max(0.0);

    if lo + 1 < boundaries.len() {
        let right = boundaries[lo + 1];
        let right_w = measure(&s[start..right]).max(0.0);
        if x - left_w > right_w - x {
            return right;
        }
    }

    left
}
