//! # edit_core
//!
//! UI-agnostic editing state for the toolkit's text elements.
//!
//! The building blocks:
//! - [`EditState`]: an owned UTF-8 buffer plus a directional selection,
//!   with all the caret/selection/editing operations an editable text box
//!   needs and a monotonic revision counter for cache invalidation
//! - [`SelectionRange`]: a normalized byte range over the buffer
//! - [`EditSnapshot`]: a by-value capture of buffer + selection, restorable
//!   to roll back an in-progress typing burst
//! - UTF-8 boundary and word/line-break utilities used by hit-testing and
//!   keyboard navigation
//!
//! ## Design
//!
//! This crate does not measure text, lay out rows, or talk to a clipboard.
//! Integration layers translate pointer positions into byte offsets (see the
//! `layout` crate) and move clipboard strings in and out; everything here is
//! a total function over clamped input. Byte offsets handed in from outside
//! may be stale or arbitrary; they are clamped to `[0, len]` and snapped to
//! character boundaries, never treated as errors.

mod selection;
mod state;
mod text;

pub use selection::SelectionRange;
pub use state::{EditSnapshot, EditState};
pub use text::{
    clamp_to_char_boundary, filter_single_line, is_line_break, is_word_break,
    nearest_boundary_for_x, next_cursor_boundary, next_word_boundary, normalize_newlines,
    prev_cursor_boundary, prev_word_boundary, word_range_at,
};
