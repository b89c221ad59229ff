//! Input event vocabulary delivered by the host view.

use bitflags::bitflags;
use core_types::Point;

bitflags! {
    /// Keyboard modifier state at the time of an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const SUPER   = 0b1000;
    }
}

impl Modifiers {
    /// The platform's primary shortcut modifier: command on macOS, control
    /// elsewhere.
    pub fn action() -> Self {
        if cfg!(target_os = "macos") {
            Modifiers::SUPER
        } else {
            Modifiers::CONTROL
        }
    }

    /// The modifier driving word-wise caret movement: option on macOS,
    /// control elsewhere.
    pub fn word_nav() -> Self {
        if cfg!(target_os = "macos") {
            Modifiers::ALT
        } else {
            Modifiers::CONTROL
        }
    }
}

/// Which physical mouse button an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A mouse press, release, or drag sample.
///
/// `down` is true while the button is held; `num_clicks` carries the host's
/// multi-click count (2 = double, 3 = triple), detected by the host using
/// its own proximity/time thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub down: bool,
    pub num_clicks: u32,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub pos: Point,
}

impl MouseEvent {
    /// A plain single left click at `pos`.
    pub fn left(down: bool, pos: Point) -> Self {
        Self {
            down,
            num_clicks: 1,
            button: MouseButton::Left,
            modifiers: Modifiers::empty(),
            pos,
        }
    }
}

/// Cursor tracking phase for hover events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorTracking {
    Entering,
    Hovering,
    Leaving,
}

/// Cursor shape an element may request while hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorType {
    #[default]
    Arrow,
    IBeam,
    CrossHair,
    Hand,
    HResize,
    VResize,
}

/// Focus transition requests routed through the element tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusRequest {
    /// Probe: would this element accept focus?
    WantsFocus,
    BeginFocus,
    EndFocus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

/// Physical key identity, independent of layout-produced text.
///
/// Printable keys also arrive as [`TextEvent`]s; elements use `KeyCode` for
/// navigation and editing chords only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Semicolon,
    Equal,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,

    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Unknown,
}

/// A key press/release/repeat with its modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub action: KeyAction,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn press(key: KeyCode) -> Self {
        Self {
            key,
            action: KeyAction::Press,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn press_with(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key,
            action: KeyAction::Press,
            modifiers,
        }
    }

    /// Press or auto-repeat, i.e. anything that should act.
    pub fn is_active(&self) -> bool {
        matches!(self.action, KeyAction::Press | KeyAction::Repeat)
    }
}

/// A unit of text input: one Unicode codepoint from the host's IME/keyboard
/// translation.
///
/// The codepoint is delivered raw (`u32`); receivers validate it and ignore
/// zero or non-scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextEvent {
    pub codepoint: u32,
    pub modifiers: Modifiers,
}

impl TextEvent {
    pub fn new(ch: char) -> Self {
        Self {
            codepoint: ch as u32,
            modifiers: Modifiers::empty(),
        }
    }

    /// The codepoint as a `char`, if it is a valid, printable scalar value.
    /// Returns `None` for zero, control characters, and invalid codepoints.
    pub fn printable(&self) -> Option<char> {
        let ch = char::from_u32(self.codepoint)?;
        if ch == '\0' || ch.is_control() {
            return None;
        }
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_event_rejects_zero_and_control() {
        assert_eq!(
            TextEvent {
                codepoint: 0,
                modifiers: Modifiers::empty()
            }
            .printable(),
            None
        );
        assert_eq!(TextEvent::new('\u{8}').printable(), None);
        assert_eq!(TextEvent::new('\n').printable(), None);
    }

    #[test]
    fn text_event_rejects_invalid_scalar() {
        // Lone surrogate: not a valid char.
        let ev = TextEvent {
            codepoint: 0xD800,
            modifiers: Modifiers::empty(),
        };
        assert_eq!(ev.printable(), None);
    }

    #[test]
    fn text_event_accepts_multibyte() {
        assert_eq!(TextEvent::new('€').printable(), Some('€'));
        assert_eq!(TextEvent::new('a').printable(), Some('a'));
    }

    #[test]
    fn key_event_active_states() {
        assert!(KeyEvent::press(KeyCode::Left).is_active());

        let repeat = KeyEvent {
            key: KeyCode::Left,
            action: KeyAction::Repeat,
            modifiers: Modifiers::empty(),
        };
        assert!(repeat.is_active());

        let release = KeyEvent {
            key: KeyCode::Left,
            action: KeyAction::Release,
            modifiers: Modifiers::empty(),
        };
        assert!(!release.is_active());
    }

    #[test]
    fn modifiers_combine() {
        let m = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::ALT));
    }
}
