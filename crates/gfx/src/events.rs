//! Translation from egui input events to the host vocabulary.
//!
//! egui does not report multi-click counts in its raw event stream, so
//! translated mouse events carry `num_clicks = 1`; hosts that want
//! double/triple-click selection track click proximity/timing themselves
//! and bump the count before dispatching.

use core_types::Point;
use host::{KeyAction, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, TextEvent};

/// One translated host input.
#[derive(Clone, Debug, PartialEq)]
pub enum HostInput {
    Click(MouseEvent),
    CursorMove(Point),
    Key(KeyEvent),
    Text(TextEvent),
}

pub fn map_modifiers(m: egui::Modifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if m.shift {
        out |= Modifiers::SHIFT;
    }
    if m.ctrl {
        out |= Modifiers::CONTROL;
    }
    if m.alt {
        out |= Modifiers::ALT;
    }
    if m.mac_cmd {
        out |= Modifiers::SUPER;
    }
    out
}

pub fn map_pointer_button(b: egui::PointerButton) -> Option<MouseButton> {
    match b {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        _ => None,
    }
}

pub fn map_key(key: egui::Key) -> KeyCode {
    use egui::Key as K;
    match key {
        K::ArrowLeft => KeyCode::Left,
        K::ArrowRight => KeyCode::Right,
        K::ArrowUp => KeyCode::Up,
        K::ArrowDown => KeyCode::Down,
        K::Home => KeyCode::Home,
        K::End => KeyCode::End,
        K::PageUp => KeyCode::PageUp,
        K::PageDown => KeyCode::PageDown,
        K::Backspace => KeyCode::Backspace,
        K::Delete => KeyCode::Delete,
        K::Insert => KeyCode::Insert,
        K::Enter => KeyCode::Enter,
        K::Escape => KeyCode::Escape,
        K::Tab => KeyCode::Tab,
        K::Space => KeyCode::Space,
        K::Comma => KeyCode::Comma,
        K::Minus => KeyCode::Minus,
        K::Period => KeyCode::Period,
        K::Slash => KeyCode::Slash,
        K::Semicolon => KeyCode::Semicolon,
        K::Equals => KeyCode::Equal,
        K::Backslash => KeyCode::Backslash,
        K::OpenBracket => KeyCode::LeftBracket,
        K::CloseBracket => KeyCode::RightBracket,
        K::Backtick => KeyCode::GraveAccent,
        K::Num0 => KeyCode::Num0,
        K::Num1 => KeyCode::Num1,
        K::Num2 => KeyCode::Num2,
        K::Num3 => KeyCode::Num3,
        K::Num4 => KeyCode::Num4,
        K::Num5 => KeyCode::Num5,
        K::Num6 => KeyCode::Num6,
        K::Num7 => KeyCode::Num7,
        K::Num8 => KeyCode::Num8,
        K::Num9 => KeyCode::Num9,
        K::A => KeyCode::A,
        K::B => KeyCode::B,
        K::C => KeyCode::C,
        K::D => KeyCode::D,
        K::E => KeyCode::E,
        K::F => KeyCode::F,
        K::G => KeyCode::G,
        K::H => KeyCode::H,
        K::I => KeyCode::I,
        K::J => KeyCode::J,
        K::K => KeyCode::K,
        K::L => KeyCode::L,
        K::M => KeyCode::M,
        K::N => KeyCode::N,
        K::O => KeyCode::O,
        K::P => KeyCode::P,
        K::Q => KeyCode::Q,
        K::R => KeyCode::R,
        K::S => KeyCode::S,
        K::T => KeyCode::T,
        K::U => KeyCode::U,
        K::V => KeyCode::V,
        K::W => KeyCode::W,
        K::X => KeyCode::X,
        K::Y => KeyCode::Y,
        K::Z => KeyCode::Z,
        K::F1 => KeyCode::F1,
        K::F2 => KeyCode::F2,
        K::F3 => KeyCode::F3,
        K::F4 => KeyCode::F4,
        K::F5 => KeyCode::F5,
        K::F6 => KeyCode::F6,
        K::F7 => KeyCode::F7,
        K::F8 => KeyCode::F8,
        K::F9 => KeyCode::F9,
        K::F10 => KeyCode::F10,
        K::F11 => KeyCode::F11,
        K::F12 => KeyCode::F12,
        _ => KeyCode::Unknown,
    }
}

/// Append the host inputs for one egui event to `out`.
///
/// Unhandled egui events (scroll, zoom, IME composition updates) are
/// skipped; a `Text` event yields one [`TextEvent`] per scalar value.
pub fn translate_event(ev: &egui::Event, out: &mut Vec<HostInput>) {
    match ev {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers,
        } => {
            let Some(button) = map_pointer_button(*button) else {
                return;
            };
            out.push(HostInput::Click(MouseEvent {
                down: *pressed,
                num_clicks: 1,
                button,
                modifiers: map_modifiers(*modifiers),
                pos: Point::new(pos.x, pos.y),
            }));
        }
        egui::Event::PointerMoved(pos) => {
            out.push(HostInput::CursorMove(Point::new(pos.x, pos.y)));
        }
        egui::Event::Key {
            key,
            pressed,
            repeat,
            modifiers,
            ..
        } => {
            let action = if !*pressed {
                KeyAction::Release
            } else if *repeat {
                KeyAction::Repeat
            } else {
                KeyAction::Press
            };
            out.push(HostInput::Key(KeyEvent {
                key: map_key(*key),
                action,
                modifiers: map_modifiers(*modifiers),
            }));
        }
        egui::Event::Text(s) => {
            for ch in s.chars() {
                out.push(HostInput::Text(TextEvent::new(ch)));
            }
        }
        _ => {}
    }
}

/// Translate a frame's worth of egui events.
pub fn translate_events(events: &[egui::Event]) -> Vec<HostInput> {
    let mut out = Vec::with_capacity(events.len());
    for ev in events {
        translate_event(ev, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_actions() {
        let mut out = Vec::new();
        translate_event(
            &egui::Event::Key {
                key: egui::Key::ArrowLeft,
                physical_key: None,
                pressed: true,
                repeat: true,
                modifiers: egui::Modifiers::SHIFT,
            },
            &mut out,
        );

        assert_eq!(
            out,
            vec![HostInput::Key(KeyEvent {
                key: KeyCode::Left,
                action: KeyAction::Repeat,
                modifiers: Modifiers::SHIFT,
            })]
        );
    }

    #[test]
    fn text_event_splits_per_scalar() {
        let mut out = Vec::new();
        translate_event(&egui::Event::Text("a€".to_owned()), &mut out);
        assert_eq!(
            out,
            vec![
                HostInput::Text(TextEvent::new('a')),
                HostInput::Text(TextEvent::new('€')),
            ]
        );
    }

    #[test]
    fn pointer_buttons_map() {
        assert_eq!(
            map_pointer_button(egui::PointerButton::Primary),
            Some(MouseButton::Left)
        );
        assert_eq!(map_pointer_button(egui::PointerButton::Extra1), None);
    }

    #[test]
    fn modifiers_map() {
        let m = egui::Modifiers {
            alt: false,
            ctrl: true,
            shift: true,
            mac_cmd: false,
            command: true,
        };
        assert_eq!(map_modifiers(m), Modifiers::SHIFT | Modifiers::CONTROL);
    }
}
