//! The element capability set.

use crate::context::{Context, LimitsCtx};
use canvas::Canvas;
use core_types::{FULL_LIMITS, Point, ViewLimits};
use host::{CursorTracking, FocusRequest, KeyEvent, MouseEvent, TextEvent};

/// A generic element value, for uniform get/set across the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i32),
    Text(String),
}

impl Value {
    /// Loose boolean reading: `Bool` as-is, `Int` non-zero, text non-empty.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::None => None,
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Some(*i != 0),
            Value::Text(s) => Some(!s.is_empty()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A drawable, hit-testable, event-receiving node in the UI tree.
///
/// Every method has a no-op default so leaf visuals only implement `draw`.
/// Event handlers return whether the element claimed the event; unclaimed
/// events fall through to the host.
pub trait Element {
    /// Size range this element is willing to occupy.
    fn limits(&self, _ctx: &LimitsCtx) -> ViewLimits {
        FULL_LIMITS
    }

    /// Recompute derived layout for the bounds in `ctx`. Called when bounds
    /// change; `draw` must not assume it ran for the current bounds.
    fn layout(&mut self, _ctx: &mut Context) {}

    fn draw(&mut self, _ctx: &mut Context, _cnv: &mut dyn Canvas) {}

    /// Whether this element occupies `p`.
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        ctx.bounds.contains(p)
    }

    /// Controls participate in focus and keyboard dispatch.
    fn is_control(&self) -> bool {
        false
    }

    fn click(&mut self, _ctx: &mut Context, _ev: MouseEvent) -> bool {
        false
    }

    fn drag(&mut self, _ctx: &mut Context, _ev: MouseEvent) {}

    /// Pointer hover notification; returns whether the element tracked it.
    fn cursor(&mut self, _ctx: &mut Context, _p: Point, _status: CursorTracking) -> bool {
        false
    }

    fn key(&mut self, _ctx: &mut Context, _ev: KeyEvent) -> bool {
        false
    }

    fn text_input(&mut self, _ctx: &mut Context, _ev: TextEvent) -> bool {
        false
    }

    fn focus(&mut self, _ctx: &mut Context, _req: FocusRequest) -> bool {
        false
    }

    fn value(&self) -> Value {
        Value::None
    }

    fn set_value(&mut self, _v: Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_as_bool_readings() {
        assert_eq!(Value::None.as_bool(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(0).as_bool(), Some(false));
        assert_eq!(Value::Int(2).as_bool(), Some(true));
        assert_eq!(Value::Text(String::new()).as_bool(), Some(false));
        assert_eq!(Value::Text("x".into()).as_bool(), Some(true));
    }

    #[test]
    fn value_as_text() {
        assert_eq!(Value::Text("hi".into()).as_text(), Some("hi"));
        assert_eq!(Value::Bool(true).as_text(), None);
    }
}
