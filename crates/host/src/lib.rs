//! The host boundary: everything a platform shell must translate raw OS
//! input into, plus the clipboard contract.
//!
//! This crate is deliberately free of any platform or graphics dependency so
//! that hosts for different backends stay interchangeable. The only types it
//! leans on are the geometry primitives from `core_types`.

mod clipboard;
mod events;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use events::{
    CursorTracking, CursorType, FocusRequest, KeyAction, KeyCode, KeyEvent, Modifiers, MouseButton,
    MouseEvent, TextEvent,
};
