//! Contexts handed to element methods.
//!
//! The theme travels through these explicitly; there is no process-wide
//! theme global, which keeps drawing reentrant and testable.

use core_types::{Rect, Theme};
use host::{Clipboard, CursorType};
use layout::TextMeasurer;

/// What an element asked the host for during a dispatch.
///
/// These are fire-and-forget signals; the host drains them after each event
/// (and coalesces redraws however it likes).
#[derive(Debug, Default)]
pub struct Requests {
    /// At least one element wants to be repainted.
    pub redraw: bool,
    /// Cursor shape requested by the element under the pointer.
    pub cursor: Option<CursorType>,
    /// A rectangle (view coordinates) that should be scrolled into view by
    /// an ancestor scroller.
    pub scroll_to: Option<Rect>,
}

/// Read-only context for [`limits`](crate::Element::limits) queries, which
/// run before any bounds exist.
pub struct LimitsCtx<'a> {
    pub theme: &'a Theme,
    pub measurer: &'a dyn TextMeasurer,
}

/// Full per-dispatch context: services plus the receiving element's bounds.
pub struct Context<'a> {
    pub theme: &'a Theme,
    pub measurer: &'a dyn TextMeasurer,
    pub clipboard: &'a mut dyn Clipboard,
    pub bounds: Rect,
    requests: &'a mut Requests,
}

impl<'a> Context<'a> {
    pub fn new(
        theme: &'a Theme,
        measurer: &'a dyn TextMeasurer,
        clipboard: &'a mut dyn Clipboard,
        bounds: Rect,
        requests: &'a mut Requests,
    ) -> Self {
        Self {
            theme,
            measurer,
            clipboard,
            bounds,
            requests,
        }
    }

    /// Reborrow this context with different bounds for a child element.
    pub fn child(&mut self, bounds: Rect) -> Context<'_> {
        Context {
            theme: self.theme,
            measurer: self.measurer,
            clipboard: &mut *self.clipboard,
            bounds,
            requests: &mut *self.requests,
        }
    }

    /// Request a repaint.
    pub fn refresh(&mut self) {
        self.requests.redraw = true;
    }

    /// Request a cursor shape for the current pointer position.
    pub fn set_cursor(&mut self, cursor: CursorType) {
        self.requests.cursor = Some(cursor);
    }

    /// Ask an ancestor scroller to bring `rect` (view coordinates) into the
    /// visible viewport.
    pub fn scroll_into_view(&mut self, rect: Rect) {
        self.requests.scroll_to = Some(rect);
    }

    pub fn limits(&self) -> LimitsCtx<'_> {
        LimitsCtx {
            theme: self.theme,
            measurer: self.measurer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Point;
    use host::MemoryClipboard;
    use layout::FixedMeasurer;

    #[test]
    fn child_context_narrows_bounds_and_shares_requests() {
        let theme = Theme::default();
        let measurer = FixedMeasurer::default();
        let mut clipboard = MemoryClipboard::new();
        let mut requests = Requests::default();

        let mut ctx = Context::new(
            &theme,
            &measurer,
            &mut clipboard,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &mut requests,
        );

        {
            let mut child = ctx.child(Rect::new(10.0, 10.0, 20.0, 20.0));
            assert!(child.bounds.contains(Point::new(15.0, 15.0)));
            child.refresh();
        }

        assert!(requests.redraw);
    }
}
