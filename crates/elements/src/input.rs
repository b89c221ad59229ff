//! Single-line input box with placeholder and submit callback.

use crate::context::{Context, LimitsCtx};
use crate::element::{Element, Value};
use crate::text::TextBox;
use canvas::{Canvas, TextAlign};
use core_types::{Point, Size, ViewLimits, FULL_EXTENT};
use host::{CursorTracking, FocusRequest, KeyCode, KeyEvent, MouseEvent, TextEvent};

/// A single-line [`TextBox`] specialization.
///
/// Differences from the plain text box:
/// - shows a placeholder in the inactive font color while empty and
///   unfocused
/// - enter submits through `on_enter(&text) -> bool` instead of inserting a
///   newline; `true` clears the box, `false` leaves the buffer unchanged
///   (and requests a redraw so the rendering layer can signal the
///   rejection)
/// - pasted newlines are stripped (inherited from the single-line text box)
pub struct InputBox {
    text_box: TextBox,
    placeholder: String,
    on_enter: Option<Box<dyn FnMut(&str) -> bool>>,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text_box: TextBox::single_line(""),
            placeholder: placeholder.into(),
            on_enter: None,
        }
    }

    pub fn with_on_enter(mut self, f: impl FnMut(&str) -> bool + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self) -> &str {
        self.text_box.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_box.set_text(text);
    }

    pub fn text_box(&self) -> &TextBox {
        &self.text_box
    }

    pub fn text_box_mut(&mut self) -> &mut TextBox {
        &mut self.text_box
    }

    fn submit(&mut self, ctx: &mut Context) {
        let Some(cb) = self.on_enter.as_mut() else {
            return;
        };

        if cb(self.text_box.text()) {
            // Submit-and-reset: an accepted entry clears the box.
            self.text_box.set_text("");
        }
        // Either way something visible happened (cleared box, or the
        // renderer's rejection signal).
        ctx.refresh();
    }
}

impl Element for InputBox {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let line_h = ctx.measurer.line_height(&ctx.theme.text_box_font);
        ViewLimits {
            min: Size::new(32.0, line_h),
            max: Size::new(FULL_EXTENT, line_h),
        }
    }

    fn layout(&mut self, ctx: &mut Context) {
        self.text_box.layout(ctx);
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        if self.text_box.text().is_empty() && !self.text_box.is_focused() {
            if self.placeholder.is_empty() {
                return;
            }
            cnv.save();
            cnv.font(&ctx.theme.text_box_font);
            cnv.fill_style(ctx.theme.inactive_font_color);
            cnv.text_align(TextAlign::LEFT | TextAlign::TOP);
            cnv.fill_text(Point::new(ctx.bounds.x, ctx.bounds.y), &self.placeholder);
            cnv.restore();
            return;
        }

        self.text_box.draw(ctx, cnv);
    }

    fn is_control(&self) -> bool {
        true
    }

    fn click(&mut self, ctx: &mut Context, ev: MouseEvent) -> bool {
        self.text_box.click(ctx, ev)
    }

    fn drag(&mut self, ctx: &mut Context, ev: MouseEvent) {
        self.text_box.drag(ctx, ev);
    }

    fn cursor(&mut self, ctx: &mut Context, p: Point, status: CursorTracking) -> bool {
        self.text_box.cursor(ctx, p, status)
    }

    fn key(&mut self, ctx: &mut Context, ev: KeyEvent) -> bool {
        if ev.key == KeyCode::Enter && ev.is_active() && self.text_box.is_focused() {
            self.submit(ctx);
            return true;
        }
        self.text_box.key(ctx, ev)
    }

    fn text_input(&mut self, ctx: &mut Context, ev: TextEvent) -> bool {
        self.text_box.text_input(ctx, ev)
    }

    fn focus(&mut self, ctx: &mut Context, req: FocusRequest) -> bool {
        self.text_box.focus(ctx, req)
    }

    fn value(&self) -> Value {
        self.text_box.value()
    }

    fn set_value(&mut self, v: Value) {
        self.text_box.set_value(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Requests;
    use canvas::RecordingCanvas;
    use core_types::{Rect, Theme};
    use host::{Clipboard, MemoryClipboard, Modifiers};
    use layout::FixedMeasurer;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Rig {
        theme: Theme,
        measurer: FixedMeasurer,
        clipboard: MemoryClipboard,
        requests: Requests,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                theme: Theme::default(),
                measurer: FixedMeasurer::default(),
                clipboard: MemoryClipboard::new(),
                requests: Requests::default(),
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context::new(
                &self.theme,
                &self.measurer,
                &mut self.clipboard,
                Rect::new(0.0, 0.0, 200.0, 16.0),
                &mut self.requests,
            )
        }
    }

    fn type_str(input: &mut InputBox, rig: &mut Rig, s: &str) {
        for ch in s.chars() {
            input.text_input(&mut rig.ctx(), TextEvent::new(ch));
        }
    }

    #[test]
    fn placeholder_shows_only_while_empty_and_unfocused() {
        let mut rig = Rig::new();
        let mut input = InputBox::new("type here");

        let mut cnv = RecordingCanvas::new();
        input.draw(&mut rig.ctx(), &mut cnv);
        assert_eq!(cnv.texts(), vec!["type here"]);

        input.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        cnv.clear();
        input.draw(&mut rig.ctx(), &mut cnv);
        assert!(!cnv.texts().contains(&"type here"));

        type_str(&mut input, &mut rig, "hi");
        input.focus(&mut rig.ctx(), FocusRequest::EndFocus);
        cnv.clear();
        input.draw(&mut rig.ctx(), &mut cnv);
        assert_eq!(cnv.texts(), vec!["hi"]);
    }

    #[test]
    fn accepted_enter_clears_the_box() {
        let mut rig = Rig::new();
        let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = submitted.clone();
        let mut input =
            InputBox::new("").with_on_enter(move |text| {
                sink.borrow_mut().push(text.to_owned());
                true
            });

        input.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        type_str(&mut input, &mut rig, "run");
        assert!(input.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Enter)));

        assert_eq!(*submitted.borrow(), vec!["run".to_owned()]);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn rejected_enter_keeps_the_buffer() {
        let mut rig = Rig::new();
        let mut input = InputBox::new("").with_on_enter(|_| false);

        input.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        type_str(&mut input, &mut rig, "bad");
        rig.requests = Requests::default();

        assert!(input.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Enter)));
        assert_eq!(input.text(), "bad");
        assert!(rig.requests.redraw, "rejection still signals a repaint");
    }

    #[test]
    fn enter_without_callback_stays_single_line() {
        let mut rig = Rig::new();
        let mut input = InputBox::new("");
        input.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        type_str(&mut input, &mut rig, "ab");

        input.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Enter));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn paste_strips_newlines() {
        let mut rig = Rig::new();
        let mut input = InputBox::new("");
        input.focus(&mut rig.ctx(), FocusRequest::BeginFocus);

        rig.clipboard.set("multi\nline\r\ntext");
        input.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::V, Modifiers::action()),
        );
        assert_eq!(input.text(), "multilinetext");
    }

    #[test]
    fn value_round_trips_text() {
        let mut input = InputBox::new("");
        input.set_value(Value::Text("abc".into()));
        assert_eq!(input.value(), Value::Text("abc".into()));
    }
}
