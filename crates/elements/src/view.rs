//! Top-down event dispatch and focus ownership.

use crate::context::{Context, LimitsCtx, Requests};
use crate::element::Element;
use canvas::Canvas;
use core_types::{Point, Rect, Size, Theme, ViewLimits};
use host::{Clipboard, CursorTracking, FocusRequest, KeyEvent, MouseEvent, TextEvent};
use layout::TextMeasurer;

/// The view: owns the root element, the theme, and the focus flag, and
/// routes host events top-down through the tree.
///
/// Event handling is synchronous and callback-driven: the host delivers one
/// event at a time and each handler runs to completion. Elements signal
/// redraw/cursor/scroll wishes into [`Requests`], which the host drains with
/// [`take_requests`](Self::take_requests) after each event (coalescing
/// redraws however it likes).
///
/// The theme is owned here and handed to elements by reference; mutate it
/// only between events ([`set_theme`](Self::set_theme)). Single writer
/// before readers, by construction.
pub struct View {
    root: Box<dyn Element>,
    theme: Theme,
    clipboard: Box<dyn Clipboard>,
    size: Size,
    focused: bool,
    requests: Requests,
}

impl View {
    pub fn new(root: Box<dyn Element>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            root,
            theme: Theme::default(),
            clipboard,
            size: Size::ZERO,
            focused: false,
            requests: Requests::default(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme. Call between events only.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.requests.redraw = true;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.requests.redraw = true;
    }

    pub fn root(&self) -> &dyn Element {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> &mut dyn Element {
        self.root.as_mut()
    }

    pub fn is_focus(&self) -> bool {
        self.focused
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Size range the root element accepts.
    pub fn limits(&self, measurer: &dyn TextMeasurer) -> ViewLimits {
        self.root.limits(&LimitsCtx {
            theme: &self.theme,
            measurer,
        })
    }

    pub fn layout(&mut self, measurer: &dyn TextMeasurer) {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.layout(&mut ctx);
    }

    pub fn draw(&mut self, measurer: &dyn TextMeasurer, cnv: &mut dyn Canvas) {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.draw(&mut ctx, cnv);
    }

    /// Route a mouse press/release. Presses move focus: hitting a control
    /// focuses it, pressing empty space blurs.
    pub fn click(&mut self, measurer: &dyn TextMeasurer, ev: MouseEvent) -> bool {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );

        if ev.down {
            let hit_control = self.root.is_control() && self.root.hit_test(&ctx, ev.pos);
            if hit_control && !self.focused {
                log::debug!("focus begins at {:?}", ev.pos);
                self.root.focus(&mut ctx, FocusRequest::BeginFocus);
                self.focused = true;
            } else if !hit_control && self.focused {
                log::debug!("focus ends");
                self.root.focus(&mut ctx, FocusRequest::EndFocus);
                self.focused = false;
            }
        }

        self.root.click(&mut ctx, ev)
    }

    pub fn drag(&mut self, measurer: &dyn TextMeasurer, ev: MouseEvent) {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.drag(&mut ctx, ev);
    }

    pub fn cursor(&mut self, measurer: &dyn TextMeasurer, p: Point, status: CursorTracking) -> bool {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.cursor(&mut ctx, p, status)
    }

    /// Keys go to the focused control only.
    pub fn key(&mut self, measurer: &dyn TextMeasurer, ev: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.key(&mut ctx, ev)
    }

    /// Text input goes to the focused control only.
    pub fn text(&mut self, measurer: &dyn TextMeasurer, ev: TextEvent) -> bool {
        if !self.focused {
            return false;
        }
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        self.root.text_input(&mut ctx, ev)
    }

    /// Window-level focus change from the host.
    pub fn focus(&mut self, measurer: &dyn TextMeasurer, req: FocusRequest) {
        let bounds = self.bounds();
        let mut ctx = Context::new(
            &self.theme,
            measurer,
            self.clipboard.as_mut(),
            bounds,
            &mut self.requests,
        );
        match req {
            FocusRequest::BeginFocus => {
                if self.root.is_control() && !self.focused {
                    self.root.focus(&mut ctx, FocusRequest::BeginFocus);
                    self.focused = true;
                }
            }
            FocusRequest::EndFocus => {
                if self.focused {
                    self.root.focus(&mut ctx, FocusRequest::EndFocus);
                    self.focused = false;
                }
            }
            FocusRequest::WantsFocus => {}
        }
    }

    /// Whether something asked for a repaint since the last drain.
    pub fn needs_redraw(&self) -> bool {
        self.requests.redraw
    }

    /// Drain the accumulated fire-and-forget requests.
    pub fn take_requests(&mut self) -> Requests {
        std::mem::take(&mut self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextBox;
    use host::{KeyCode, MemoryClipboard};
    use layout::FixedMeasurer;

    const M: FixedMeasurer = FixedMeasurer {
        advance: 10.0,
        line_h: 16.0,
    };

    fn text_view(text: &str) -> View {
        let mut view = View::new(
            Box::new(TextBox::new(text)),
            Box::new(MemoryClipboard::new()),
        );
        view.resize(Size::new(200.0, 100.0));
        view
    }

    #[test]
    fn click_on_control_focuses_and_places_caret() {
        let mut view = text_view("hello");
        assert!(!view.is_focus());

        view.click(&M, MouseEvent::left(true, Point::new(0.0, 4.0)));
        assert!(view.is_focus());

        // Caret was placed by the click, at offset 0.
        assert!(view.key(&M, KeyEvent::press(KeyCode::Right)));
    }

    #[test]
    fn click_outside_blurs() {
        let mut view = text_view("hello");
        view.click(&M, MouseEvent::left(true, Point::new(0.0, 4.0)));
        assert!(view.is_focus());

        view.click(&M, MouseEvent::left(true, Point::new(500.0, 500.0)));
        assert!(!view.is_focus());
    }

    #[test]
    fn keys_require_focus() {
        let mut view = text_view("hello");
        assert!(!view.key(&M, KeyEvent::press(KeyCode::Left)));
        assert!(!view.text(&M, TextEvent::new('x')));
    }

    #[test]
    fn requests_drain_once() {
        let mut view = text_view("hello");
        view.click(&M, MouseEvent::left(true, Point::new(0.0, 4.0)));
        assert!(view.needs_redraw());

        let drained = view.take_requests();
        assert!(drained.redraw);
        assert!(!view.needs_redraw());
    }

    #[test]
    fn window_focus_round_trip() {
        let mut view = text_view("hello");
        view.focus(&M, FocusRequest::BeginFocus);
        assert!(view.is_focus());
        view.focus(&M, FocusRequest::EndFocus);
        assert!(!view.is_focus());
    }
}
