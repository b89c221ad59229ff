//! Fixed-arity composite of owned children.

use crate::context::{Context, LimitsCtx};
use crate::element::{Element, Value};
use canvas::Canvas;
use core_types::{Size, ViewLimits};

/// An ordered, fixed-arity stack of child elements of which exactly one is
/// active (drawn, and the target of value get/set).
///
/// `N` is fixed at construction; slots are addressable by index. Children
/// are owned exclusively; sharing an element between two parents is not
/// supported. Buttons use a `Deck<2>` for their off/on faces.
pub struct Deck<const N: usize> {
    children: [Box<dyn Element>; N],
    active: usize,
}

impl<const N: usize> Deck<N> {
    pub fn new(children: [Box<dyn Element>; N]) -> Self {
        const {
            assert!(N > 0, "a deck needs at least one slot");
        }
        Self {
            children,
            active: 0,
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Switch the active child. Out-of-range indices clamp to the last slot.
    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(N - 1);
    }

    pub fn at(&self, index: usize) -> &dyn Element {
        self.children[index].as_ref()
    }

    pub fn at_mut(&mut self, index: usize) -> &mut dyn Element {
        self.children[index].as_mut()
    }

    fn active_child(&self) -> &dyn Element {
        self.children[self.active].as_ref()
    }

    fn active_child_mut(&mut self) -> &mut dyn Element {
        self.children[self.active].as_mut()
    }
}

impl<const N: usize> Element for Deck<N> {
    /// The intersection of all children's limits: every face must fit the
    /// slot the deck is given.
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let mut min = Size::ZERO;
        let mut max = Size::new(f32::INFINITY, f32::INFINITY);

        for child in &self.children {
            let l = child.limits(ctx);
            min.width = min.width.max(l.min.width);
            min.height = min.height.max(l.min.height);
            max.width = max.width.min(l.max.width);
            max.height = max.height.min(l.max.height);
        }

        max.width = max.width.max(min.width);
        max.height = max.height.max(min.height);
        ViewLimits { min, max }
    }

    fn layout(&mut self, ctx: &mut Context) {
        for child in &mut self.children {
            child.layout(ctx);
        }
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        self.active_child_mut().draw(ctx, cnv);
    }

    // Only one face is visible at a time, so hit-testing degenerates to the
    // deck's own bounds (the trait default).

    fn value(&self) -> Value {
        self.active_child().value()
    }

    fn set_value(&mut self, v: Value) {
        self.active_child_mut().set_value(v);
    }
}
