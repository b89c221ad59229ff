//! Button state machines: momentary, toggle, and latching.

use crate::composite::Deck;
use crate::context::{Context, LimitsCtx};
use crate::element::{Element, Value};
use canvas::Canvas;
use core_types::ViewLimits;
use host::MouseEvent;

/// Release policy of a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonMode {
    /// On only while held; releases to off.
    Momentary,
    /// Press-and-release within bounds flips the value; dragging away and
    /// releasing outside does not.
    Toggle,
    /// Press latches on; only an external `set_value(false)` clears it.
    Latching,
}

/// A two-face button: slot 0 is the "off" face, slot 1 the "on" face, and
/// the visible state selects which one draws.
///
/// All three behaviors share this one struct; `mode` picks the click/drag
/// policy. `on_click` fires on every *visible* state transition (interactive
/// or via [`set_value`](Self::set_value)) and never redundantly.
pub struct Button {
    faces: Deck<2>,
    mode: ButtonMode,
    state: bool,
    /// Value at press start; the toggle commit is computed relative to it.
    pressed_state: bool,
    /// True between a claimed mouse-down and the matching mouse-up.
    tracking: bool,
    enabled: bool,
    on_click: Option<Box<dyn FnMut(bool)>>,
}

impl Button {
    pub fn new(mode: ButtonMode, off: Box<dyn Element>, on: Box<dyn Element>) -> Self {
        Self {
            faces: Deck::new([off, on]),
            mode,
            state: false,
            pressed_state: false,
            tracking: false,
            enabled: true,
            on_click: None,
        }
    }

    pub fn momentary(off: Box<dyn Element>, on: Box<dyn Element>) -> Self {
        Self::new(ButtonMode::Momentary, off, on)
    }

    pub fn toggle(off: Box<dyn Element>, on: Box<dyn Element>) -> Self {
        Self::new(ButtonMode::Toggle, off, on)
    }

    pub fn latching(off: Box<dyn Element>, on: Box<dyn Element>) -> Self {
        Self::new(ButtonMode::Latching, off, on)
    }

    pub fn with_on_click(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracking = false;
        }
    }

    /// External state assignment, with the same callback-firing semantics as
    /// an interactive transition.
    pub fn set_state(&mut self, new_state: bool) {
        self.update_state(new_state);
    }

    /// Flip the visible state if it changed; fires `on_click` exactly when a
    /// visible transition happens.
    fn update_state(&mut self, new_state: bool) -> bool {
        if self.state == new_state {
            return false;
        }
        self.state = new_state;
        self.faces.set_active(new_state as usize);
        if let Some(cb) = &mut self.on_click {
            cb(new_state);
        }
        true
    }
}

impl Element for Button {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        self.faces.limits(ctx)
    }

    fn layout(&mut self, ctx: &mut Context) {
        self.faces.layout(ctx);
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        self.faces.draw(ctx, cnv);
    }

    fn hit_test(&self, ctx: &Context, p: core_types::Point) -> bool {
        self.enabled && ctx.bounds.contains(p)
    }

    fn is_control(&self) -> bool {
        true
    }

    fn click(&mut self, ctx: &mut Context, ev: MouseEvent) -> bool {
        if !self.enabled {
            return false;
        }

        let hit = ctx.bounds.contains(ev.pos);

        if ev.down {
            if !hit {
                return false;
            }
            self.tracking = true;
            self.pressed_state = self.state;

            let changed = match self.mode {
                ButtonMode::Momentary | ButtonMode::Latching => self.update_state(true),
                ButtonMode::Toggle => {
                    let pressed = self.pressed_state;
                    self.update_state(!pressed)
                }
            };
            if changed {
                ctx.refresh();
            }
            return true;
        }

        // Releases are only meaningful while we hold the press.
        if !self.tracking {
            return false;
        }
        self.tracking = false;

        let changed = match self.mode {
            ButtonMode::Momentary => self.update_state(false),
            ButtonMode::Toggle => {
                let pressed = self.pressed_state;
                if hit {
                    self.update_state(!pressed)
                } else {
                    self.update_state(pressed)
                }
            }
            ButtonMode::Latching => false,
        };
        if changed {
            ctx.refresh();
        }
        true
    }

    fn drag(&mut self, ctx: &mut Context, ev: MouseEvent) {
        if !self.enabled || !self.tracking {
            return;
        }

        let hit = ctx.bounds.contains(ev.pos);
        let changed = match self.mode {
            ButtonMode::Momentary => self.update_state(hit),
            ButtonMode::Toggle => {
                let pressed = self.pressed_state;
                if hit {
                    self.update_state(!pressed)
                } else {
                    self.update_state(pressed)
                }
            }
            // A latched press stays visibly down wherever the pointer goes.
            ButtonMode::Latching => false,
        };
        if changed {
            ctx.refresh();
        }
    }

    fn value(&self) -> Value {
        Value::Bool(self.state)
    }

    fn set_value(&mut self, v: Value) {
        if let Some(b) = v.as_bool() {
            self.set_state(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Requests;
    use core_types::{Point, Rect, Theme};
    use host::{MemoryClipboard, MouseEvent};
    use layout::FixedMeasurer;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Face;
    impl Element for Face {}

    fn button(mode: ButtonMode) -> (Button, Rc<RefCell<Vec<bool>>>) {
        let log: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = log.clone();
        let btn = Button::new(mode, Box::new(Face), Box::new(Face))
            .with_on_click(move |state| sink.borrow_mut().push(state));
        (btn, log)
    }

    fn dispatch(btn: &mut Button, f: impl FnOnce(&mut Button, &mut Context)) {
        let theme = Theme::default();
        let measurer = FixedMeasurer::default();
        let mut clipboard = MemoryClipboard::new();
        let mut requests = Requests::default();
        let mut ctx = Context::new(
            &theme,
            &measurer,
            &mut clipboard,
            Rect::new(0.0, 0.0, 100.0, 40.0),
            &mut requests,
        );
        f(btn, &mut ctx);
    }

    const INSIDE: Point = Point { x: 50.0, y: 20.0 };
    const OUTSIDE: Point = Point { x: 500.0, y: 20.0 };

    #[test]
    fn momentary_press_release_fires_exactly_twice() {
        let (mut btn, log) = button(ButtonMode::Momentary);

        dispatch(&mut btn, |b, ctx| {
            assert!(b.click(ctx, MouseEvent::left(true, INSIDE)));
            assert!(b.click(ctx, MouseEvent::left(false, INSIDE)));
        });

        assert_eq!(*log.borrow(), vec![true, false]);
        assert!(!btn.state());
    }

    #[test]
    fn momentary_drag_off_reverts_and_back_restores() {
        let (mut btn, log) = button(ButtonMode::Momentary);

        dispatch(&mut btn, |b, ctx| {
            b.click(ctx, MouseEvent::left(true, INSIDE));
            b.drag(ctx, MouseEvent::left(true, OUTSIDE));
            b.drag(ctx, MouseEvent::left(true, OUTSIDE)); // no redundant callback
            b.drag(ctx, MouseEvent::left(true, INSIDE));
            b.click(ctx, MouseEvent::left(false, INSIDE));
        });

        assert_eq!(*log.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn toggle_press_release_inside_flips() {
        let (mut btn, _log) = button(ButtonMode::Toggle);

        dispatch(&mut btn, |b, ctx| {
            b.click(ctx, MouseEvent::left(true, INSIDE));
            b.click(ctx, MouseEvent::left(false, INSIDE));
        });
        assert!(btn.state());

        dispatch(&mut btn, |b, ctx| {
            b.click(ctx, MouseEvent::left(true, INSIDE));
            b.click(ctx, MouseEvent::left(false, INSIDE));
        });
        assert!(!btn.state());
    }

    #[test]
    fn toggle_drag_away_and_release_outside_leaves_state() {
        let (mut btn, _log) = button(ButtonMode::Toggle);

        dispatch(&mut btn, |b, ctx| {
            b.click(ctx, MouseEvent::left(true, INSIDE));
            b.drag(ctx, MouseEvent::left(true, OUTSIDE));
            b.click(ctx, MouseEvent::left(false, OUTSIDE));
        });

        assert!(!btn.state());
    }

    #[test]
    fn toggle_shows_feedback_while_held() {
        let (mut btn, _log) = button(ButtonMode::Toggle);

        dispatch(&mut btn, |b, ctx| {
            b.click(ctx, MouseEvent::left(true, INSIDE));
            assert!(b.state(), "pressed face while held inside");
            b.drag(ctx, MouseEvent::left(true, OUTSIDE));
            assert!(!b.state(), "reverts while dragged outside");
        });
    }

    #[test]
    fn latching_stays_on_until_cleared_externally() {
        let (mut btn, log) = button(ButtonMode::Latching);

        for _ in 0..3 {
            dispatch(&mut btn, |b, ctx| {
                b.click(ctx, MouseEvent::left(true, INSIDE));
                b.click(ctx, MouseEvent::left(false, INSIDE));
            });
            assert!(btn.state());
        }
        // Only the first press was a visible transition.
        assert_eq!(*log.borrow(), vec![true]);

        btn.set_value(Value::Bool(false));
        assert!(!btn.state());
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn disabled_button_ignores_events() {
        let (mut btn, log) = button(ButtonMode::Momentary);
        btn.set_enabled(false);

        dispatch(&mut btn, |b, ctx| {
            assert!(!b.click(ctx, MouseEvent::left(true, INSIDE)));
            b.drag(ctx, MouseEvent::left(true, INSIDE));
        });

        assert!(log.borrow().is_empty());
        assert!(!btn.state());
    }

    #[test]
    fn press_outside_bounds_is_not_claimed() {
        let (mut btn, log) = button(ButtonMode::Momentary);
        dispatch(&mut btn, |b, ctx| {
            assert!(!b.click(ctx, MouseEvent::left(true, OUTSIDE)));
        });
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn set_value_fires_like_a_click() {
        let (mut btn, log) = button(ButtonMode::Toggle);
        btn.set_value(Value::Int(1));
        btn.set_value(Value::Int(1)); // no change, no callback
        assert_eq!(*log.borrow(), vec![true]);
        assert_eq!(btn.value(), Value::Bool(true));
    }
}
