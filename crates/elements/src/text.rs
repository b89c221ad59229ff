//! Static and editable text boxes.

use crate::context::{Context, LimitsCtx};
use crate::element::{Element, Value};
use canvas::{Canvas, TextAlign};
use core_types::{Color, Point, Rect, Size, TextFormat, Theme, ViewLimits, FULL_EXTENT};
use edit_core::{
    filter_single_line, is_word_break, normalize_newlines, word_range_at, EditSnapshot, EditState,
};
use host::{
    CursorTracking, CursorType, FocusRequest, KeyCode, KeyEvent, Modifiers, MouseEvent, TextEvent,
};
use layout::{caret_from_point, caret_geometry, move_vertically, row_index_for_caret, RowCache};

fn resolved_format(format: Option<TextFormat>, theme: &Theme) -> TextFormat {
    format.unwrap_or(theme.text_box_font)
}

fn resolved_color(color: Option<Color>, theme: &Theme) -> Color {
    color.unwrap_or(theme.text_box_font_color)
}

/// The byte range of the hard line containing `pos`.
fn line_range_at(text: &str, pos: usize) -> (usize, usize) {
    let pos = pos.min(text.len());
    let start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len());
    (start, end)
}

// ----------------------------------------------------------------------------
// Static text
// ----------------------------------------------------------------------------

/// A word-wrapped, non-editable text display.
pub struct StaticTextBox {
    text: String,
    revision: u64,
    format: Option<TextFormat>,
    color: Option<Color>,
    cache: RowCache,
}

impl StaticTextBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision: 0,
            format: None,
            color: None,
            cache: RowCache::new(),
        }
    }

    /// Use a specific format instead of the theme's text box font.
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Element for StaticTextBox {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let format = resolved_format(self.format, ctx.theme);
        let line_h = ctx.measurer.line_height(&format);
        ViewLimits {
            min: Size::new(0.0, line_h),
            max: Size::new(FULL_EXTENT, FULL_EXTENT),
        }
    }

    fn layout(&mut self, ctx: &mut Context) {
        let format = resolved_format(self.format, ctx.theme);
        self.cache.ensure(
            ctx.measurer,
            &format,
            ctx.bounds.width,
            &self.text,
            self.revision,
        );
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let format = resolved_format(self.format, ctx.theme);
        let color = resolved_color(self.color, ctx.theme);

        // Bounds may have changed since the last layout pass; the cache key
        // covers that.
        let rows = self.cache.ensure(
            ctx.measurer,
            &format,
            ctx.bounds.width,
            &self.text,
            self.revision,
        );

        cnv.save();
        cnv.font(&format);
        cnv.fill_style(color);
        cnv.text_align(TextAlign::LEFT | TextAlign::TOP);
        for row in rows {
            if row.start < row.end {
                cnv.fill_text(
                    Point::new(ctx.bounds.x, ctx.bounds.y + row.rect.y),
                    &self.text[row.start..row.end],
                );
            }
        }
        cnv.restore();
    }

    fn value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_value(&mut self, v: Value) {
        if let Value::Text(s) = v {
            self.set_text(s);
        }
    }
}

// ----------------------------------------------------------------------------
// Editable text
// ----------------------------------------------------------------------------

/// The editable text box.
///
/// Owns its buffer and selection (via [`EditState`]), a row-layout cache
/// invalidated on width/text changes, the preferred column for vertical
/// navigation, and a typing-state snapshot that escape restores.
pub struct TextBox {
    edit: EditState,
    format: Option<TextFormat>,
    color: Option<Color>,
    cache: RowCache,
    /// Preferred column for up/down runs; dropped on any horizontal move.
    current_x: Option<f32>,
    /// Captured before the first edit of a typing burst.
    typing_state: Option<EditSnapshot>,
    focused: bool,
    tracking: bool,
    single_line: bool,
}

impl TextBox {
    /// A multi-line, word-wrapping editable box.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            edit: EditState::new(text),
            format: None,
            color: None,
            cache: RowCache::new(),
            current_x: None,
            typing_state: None,
            focused: false,
            tracking: false,
            single_line: false,
        }
    }

    /// A single-line box: never wraps, rejects newline input.
    pub fn single_line(text: impl Into<String>) -> Self {
        Self {
            single_line: true,
            ..Self::new(text)
        }
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text(&self) -> &str {
        self.edit.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
        self.current_x = None;
        self.typing_state = None;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    pub fn select_start(&self) -> usize {
        self.edit.select_start()
    }

    pub fn select_end(&self) -> usize {
        self.edit.select_end()
    }

    /// Select `[a, b)`, anchor at `a`.
    pub fn select(&mut self, a: usize, b: usize) {
        self.edit.select_range(a, b);
    }

    pub fn select_all(&mut self) {
        self.edit.select_all();
    }

    pub fn select_none(&mut self) {
        self.edit.select_none();
    }

    /// Read access to the underlying edit state.
    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    fn wrap_width(&self, bounds_width: f32) -> f32 {
        if self.single_line { 0.0 } else { bounds_width }
    }

    /// Capture the pre-burst state once; escape restores it.
    fn remember_typing_state(&mut self) {
        if self.typing_state.is_none() {
            self.typing_state = Some(self.edit.snapshot());
        }
    }

    /// Compute the caret rectangle and ask the view to make it visible.
    /// `save_x` keeps the cached vertical-navigation column alive.
    fn request_caret_visible(&mut self, ctx: &mut Context, save_x: bool) {
        let format = resolved_format(self.format, ctx.theme);
        let wrap = self.wrap_width(ctx.bounds.width);
        let rows = self.cache.ensure(
            ctx.measurer,
            &format,
            wrap,
            self.edit.text(),
            self.edit.revision(),
        );

        let (x, y, h) = caret_geometry(
            ctx.measurer,
            &format,
            self.edit.text(),
            rows,
            self.edit.caret(),
        );
        let w = ctx.theme.caret_width.max(1.0);
        let target = Rect::new(ctx.bounds.x + x, ctx.bounds.y + y, w, h);
        ctx.scroll_into_view(target);

        if !save_x {
            self.current_x = None;
        }
    }

    fn after_edit(&mut self, ctx: &mut Context) {
        self.request_caret_visible(ctx, false);
        ctx.refresh();
    }

    fn copy_selection(&mut self, ctx: &mut Context) {
        let s = self.edit.selected_text().to_owned();
        if !s.is_empty() {
            ctx.clipboard.set(&s);
        }
    }

    fn cut(&mut self, ctx: &mut Context) {
        if !self.edit.has_selection() {
            return;
        }
        self.remember_typing_state();
        if let Some(s) = self.edit.cut_selection() {
            ctx.clipboard.set(&s);
        }
        self.after_edit(ctx);
    }

    fn paste(&mut self, ctx: &mut Context) {
        let s = ctx.clipboard.get();
        let s = if self.single_line {
            filter_single_line(&s).into_owned()
        } else {
            normalize_newlines(&s).into_owned()
        };
        if s.is_empty() {
            return;
        }

        self.remember_typing_state();
        self.edit.insert(&s);
        self.after_edit(ctx);
    }
}

impl Element for TextBox {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let format = resolved_format(self.format, ctx.theme);
        let line_h = ctx.measurer.line_height(&format);
        let max_h = if self.single_line { line_h } else { FULL_EXTENT };
        ViewLimits {
            min: Size::new(0.0, line_h),
            max: Size::new(FULL_EXTENT, max_h),
        }
    }

    fn layout(&mut self, ctx: &mut Context) {
        let format = resolved_format(self.format, ctx.theme);
        let wrap = self.wrap_width(ctx.bounds.width);
        self.cache.ensure(
            ctx.measurer,
            &format,
            wrap,
            self.edit.text(),
            self.edit.revision(),
        );
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let format = resolved_format(self.format, ctx.theme);
        let color = resolved_color(self.color, ctx.theme);
        let wrap = self.wrap_width(ctx.bounds.width);
        let rows = self.cache.ensure(
            ctx.measurer,
            &format,
            wrap,
            self.edit.text(),
            self.edit.revision(),
        );
        let text = self.edit.text();

        cnv.save();

        // Selection highlight behind the glyphs.
        if let Some(sel) = self.edit.selection() {
            cnv.fill_style(ctx.theme.selection_color);
            for row in rows {
                let a = sel.start.clamp(row.start, row.end);
                let b = sel.end.clamp(row.start, row.end);
                if a >= b {
                    continue;
                }
                let x0 = layout::x_for_index(ctx.measurer, &format, text, row, a);
                let x1 = layout::x_for_index(ctx.measurer, &format, text, row, b);
                cnv.fill_rect(Rect::new(
                    ctx.bounds.x + x0,
                    ctx.bounds.y + row.rect.y,
                    (x1 - x0).max(0.0),
                    row.rect.height,
                ));
            }
        }

        cnv.font(&format);
        cnv.fill_style(color);
        cnv.text_align(TextAlign::LEFT | TextAlign::TOP);
        for row in rows {
            if row.start < row.end {
                cnv.fill_text(
                    Point::new(ctx.bounds.x, ctx.bounds.y + row.rect.y),
                    &text[row.start..row.end],
                );
            }
        }

        // Caret, only when focused and collapsed.
        if self.focused && self.edit.selection().is_none() {
            let (x, y, h) = caret_geometry(ctx.measurer, &format, text, rows, self.edit.caret());
            cnv.fill_style(ctx.theme.caret_color);
            cnv.fill_rect(Rect::new(
                ctx.bounds.x + x,
                ctx.bounds.y + y,
                ctx.theme.caret_width.max(1.0),
                h,
            ));
        }

        cnv.restore();
    }

    fn is_control(&self) -> bool {
        true
    }

    fn click(&mut self, ctx: &mut Context, ev: MouseEvent) -> bool {
        if !ev.down {
            if self.tracking {
                self.tracking = false;
                return true;
            }
            return false;
        }
        if !ctx.bounds.contains(ev.pos) {
            return false;
        }

        let format = resolved_format(self.format, ctx.theme);
        let wrap = self.wrap_width(ctx.bounds.width);
        let rows = self.cache.ensure(
            ctx.measurer,
            &format,
            wrap,
            self.edit.text(),
            self.edit.revision(),
        );

        let local = Point::new(ev.pos.x - ctx.bounds.x, ev.pos.y - ctx.bounds.y);
        let offset = caret_from_point(ctx.measurer, &format, self.edit.text(), rows, local);

        match ev.num_clicks {
            2 => {
                let (a, b) = word_range_at(self.edit.text(), offset, is_word_break);
                self.edit.select_range(a, b);
            }
            n if n >= 3 => {
                let (a, b) = line_range_at(self.edit.text(), offset);
                self.edit.select_range(a, b);
            }
            _ => {
                let selecting = ev.modifiers.contains(Modifiers::SHIFT);
                self.edit.set_caret(offset, selecting);
            }
        }

        self.tracking = true;
        self.request_caret_visible(ctx, false);
        ctx.refresh();
        true
    }

    fn drag(&mut self, ctx: &mut Context, ev: MouseEvent) {
        if !self.tracking {
            return;
        }

        let format = resolved_format(self.format, ctx.theme);
        let wrap = self.wrap_width(ctx.bounds.width);
        let rows = self.cache.ensure(
            ctx.measurer,
            &format,
            wrap,
            self.edit.text(),
            self.edit.revision(),
        );

        let local = Point::new(ev.pos.x - ctx.bounds.x, ev.pos.y - ctx.bounds.y);
        let offset = caret_from_point(ctx.measurer, &format, self.edit.text(), rows, local);

        // The anchor stays at the press-time offset; only the active end
        // follows the pointer.
        self.edit.set_caret(offset, true);
        self.request_caret_visible(ctx, false);
        ctx.refresh();
    }

    fn cursor(&mut self, ctx: &mut Context, p: Point, status: CursorTracking) -> bool {
        if matches!(status, CursorTracking::Leaving) {
            return false;
        }
        if ctx.bounds.contains(p) {
            ctx.set_cursor(CursorType::IBeam);
            return true;
        }
        false
    }

    fn key(&mut self, ctx: &mut Context, ev: KeyEvent) -> bool {
        if !self.focused || !ev.is_active() {
            return false;
        }

        let selecting = ev.modifiers.contains(Modifiers::SHIFT);
        let by_word = ev.modifiers.intersects(Modifiers::word_nav());

        if ev.modifiers.intersects(Modifiers::action()) {
            match ev.key {
                KeyCode::A => {
                    self.edit.select_all();
                    ctx.refresh();
                    return true;
                }
                KeyCode::C => {
                    self.copy_selection(ctx);
                    return true;
                }
                KeyCode::X => {
                    self.cut(ctx);
                    return true;
                }
                KeyCode::V => {
                    self.paste(ctx);
                    return true;
                }
                _ => {}
            }
        }

        match ev.key {
            KeyCode::Left => {
                if by_word {
                    self.edit.move_word_left(selecting);
                } else {
                    self.edit.move_left(selecting);
                }
                self.request_caret_visible(ctx, false);
                ctx.refresh();
                true
            }
            KeyCode::Right => {
                if by_word {
                    self.edit.move_word_right(selecting);
                } else {
                    self.edit.move_right(selecting);
                }
                self.request_caret_visible(ctx, false);
                ctx.refresh();
                true
            }
            KeyCode::Up | KeyCode::Down => {
                let delta = if ev.key == KeyCode::Up { -1 } else { 1 };
                let format = resolved_format(self.format, ctx.theme);
                let wrap = self.wrap_width(ctx.bounds.width);
                let rows = self.cache.ensure(
                    ctx.measurer,
                    &format,
                    wrap,
                    self.edit.text(),
                    self.edit.revision(),
                );
                self.current_x = move_vertically(
                    &mut self.edit,
                    rows,
                    ctx.measurer,
                    &format,
                    delta,
                    self.current_x,
                    selecting,
                );
                self.request_caret_visible(ctx, true);
                ctx.refresh();
                true
            }
            KeyCode::Home | KeyCode::End => {
                let format = resolved_format(self.format, ctx.theme);
                let wrap = self.wrap_width(ctx.bounds.width);
                let rows = self.cache.ensure(
                    ctx.measurer,
                    &format,
                    wrap,
                    self.edit.text(),
                    self.edit.revision(),
                );
                let i = row_index_for_caret(rows, self.edit.caret());
                let target = if ev.key == KeyCode::Home {
                    rows.get(i).map(|r| r.start).unwrap_or(0)
                } else {
                    rows.get(i).map(|r| r.end).unwrap_or(self.edit.text().len())
                };
                self.edit.set_caret(target, selecting);
                self.request_caret_visible(ctx, false);
                ctx.refresh();
                true
            }
            KeyCode::Backspace => {
                self.remember_typing_state();
                self.edit.backspace();
                self.after_edit(ctx);
                true
            }
            KeyCode::Delete => {
                self.remember_typing_state();
                self.edit.delete_forward();
                self.after_edit(ctx);
                true
            }
            KeyCode::Enter => {
                if self.single_line {
                    return false;
                }
                self.remember_typing_state();
                self.edit.insert("\n");
                self.after_edit(ctx);
                true
            }
            KeyCode::Escape => match self.typing_state.take() {
                Some(snapshot) => {
                    self.edit.restore(snapshot);
                    self.after_edit(ctx);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn text_input(&mut self, ctx: &mut Context, ev: TextEvent) -> bool {
        if !self.focused {
            return false;
        }
        // Malformed input (zero/control/invalid codepoints) is dropped.
        let Some(ch) = ev.printable() else {
            return false;
        };

        self.remember_typing_state();
        let mut buf = [0u8; 4];
        self.edit.insert(ch.encode_utf8(&mut buf));
        self.after_edit(ctx);
        true
    }

    fn focus(&mut self, ctx: &mut Context, req: FocusRequest) -> bool {
        match req {
            FocusRequest::WantsFocus => true,
            FocusRequest::BeginFocus => {
                if !self.focused {
                    self.focused = true;
                    // A focusing click re-places the caret right after this.
                    self.edit.move_to_end(false);
                    ctx.refresh();
                }
                true
            }
            FocusRequest::EndFocus => {
                if self.focused {
                    self.focused = false;
                    self.edit.select_none();
                    self.typing_state = None;
                    ctx.refresh();
                }
                true
            }
        }
    }

    fn value(&self) -> Value {
        Value::Text(self.edit.text().to_owned())
    }

    fn set_value(&mut self, v: Value) {
        if let Value::Text(s) = v {
            self.set_text(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Requests;
    use canvas::{DrawCmd, RecordingCanvas};
    use host::{Clipboard, MemoryClipboard};
    use layout::FixedMeasurer;

    // 10px advance, 16px lines, 200px-wide box unless stated otherwise.
    struct Rig {
        theme: Theme,
        measurer: FixedMeasurer,
        clipboard: MemoryClipboard,
        requests: Requests,
        bounds: Rect,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                theme: Theme::default(),
                measurer: FixedMeasurer::default(),
                clipboard: MemoryClipboard::new(),
                requests: Requests::default(),
                bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context::new(
                &self.theme,
                &self.measurer,
                &mut self.clipboard,
                self.bounds,
                &mut self.requests,
            )
        }
    }

    fn focused_box(text: &str) -> (TextBox, Rig) {
        let mut rig = Rig::new();
        let mut tb = TextBox::new(text);
        tb.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        rig.requests = Requests::default();
        (tb, rig)
    }

    #[test]
    fn line_range_at_finds_hard_line() {
        assert_eq!(line_range_at("ab\ncd\nef", 0), (0, 2));
        assert_eq!(line_range_at("ab\ncd\nef", 4), (3, 5));
        assert_eq!(line_range_at("ab\ncd\nef", 8), (6, 8));
        assert_eq!(line_range_at("abc", 1), (0, 3));
    }

    #[test]
    fn begin_focus_places_caret_at_end() {
        let (tb, _rig) = focused_box("hello");
        assert!(tb.is_focused());
        assert_eq!(tb.select_end(), 5);
    }

    #[test]
    fn end_focus_clears_selection() {
        let (mut tb, mut rig) = focused_box("hello");
        tb.select(1, 4);
        tb.focus(&mut rig.ctx(), FocusRequest::EndFocus);
        assert!(!tb.is_focused());
        assert_eq!(tb.edit().selection(), None);
    }

    #[test]
    fn click_places_caret_at_nearest_boundary() {
        let (mut tb, mut rig) = focused_box("hello world");
        // 10px per char: x=31 is closest to boundary 3.
        let claimed = tb.click(
            &mut rig.ctx(),
            MouseEvent::left(true, Point::new(31.0, 4.0)),
        );
        assert!(claimed);
        assert_eq!(tb.select_start(), 3);
        assert_eq!(tb.select_end(), 3);
        assert!(rig.requests.redraw);
    }

    #[test]
    fn click_outside_is_not_claimed() {
        let (mut tb, mut rig) = focused_box("hello");
        assert!(!tb.click(
            &mut rig.ctx(),
            MouseEvent::left(true, Point::new(500.0, 4.0))
        ));
    }

    #[test]
    fn drag_extends_selection_from_press_anchor() {
        let (mut tb, mut rig) = focused_box("hello world");

        tb.click(&mut rig.ctx(), MouseEvent::left(true, Point::new(20.0, 4.0)));
        tb.drag(&mut rig.ctx(), MouseEvent::left(true, Point::new(70.0, 4.0)));

        assert_eq!(tb.select_start(), 2);
        assert_eq!(tb.select_end(), 7);
        assert_eq!(tb.edit().selected_text(), "llo w");

        // Dragging back before the anchor flips direction, anchor fixed.
        tb.drag(&mut rig.ctx(), MouseEvent::left(true, Point::new(0.0, 4.0)));
        assert_eq!(tb.select_start(), 2);
        assert_eq!(tb.select_end(), 0);

        assert!(tb.click(
            &mut rig.ctx(),
            MouseEvent::left(false, Point::new(0.0, 4.0))
        ));
    }

    #[test]
    fn double_click_selects_word() {
        let (mut tb, mut rig) = focused_box("foo bar baz");
        let mut ev = MouseEvent::left(true, Point::new(55.0, 4.0)); // inside "bar"
        ev.num_clicks = 2;
        tb.click(&mut rig.ctx(), ev);
        assert_eq!(tb.edit().selected_text(), "bar");
    }

    #[test]
    fn triple_click_selects_line() {
        let (mut tb, mut rig) = focused_box("one two\nthree");
        let mut ev = MouseEvent::left(true, Point::new(15.0, 4.0));
        ev.num_clicks = 3;
        tb.click(&mut rig.ctx(), ev);
        assert_eq!(tb.edit().selected_text(), "one two");
    }

    #[test]
    fn arrows_move_and_shift_extends() {
        let (mut tb, mut rig) = focused_box("hello world");
        tb.edit.set_caret(5, false);

        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Right));
        assert_eq!(tb.select_end(), 6);

        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Left));
        assert_eq!(tb.select_end(), 5);

        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::Left, Modifiers::SHIFT),
        );
        assert_eq!(
            tb.edit().selection(),
            Some(edit_core::SelectionRange { start: 4, end: 5 })
        );
    }

    #[test]
    fn word_arrows_jump_boundaries() {
        let (mut tb, mut rig) = focused_box("foo bar baz");
        tb.edit.set_caret(0, false);
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::Right, Modifiers::word_nav()),
        );
        assert_eq!(tb.select_end(), 4);
    }

    #[test]
    fn vertical_navigation_keeps_column() {
        let (mut tb, mut rig) = focused_box("abcdef\ngh\nijklmn");
        tb.edit.set_caret(5, false);

        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Down));
        assert_eq!(tb.select_end(), 9); // clamped to short row end

        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Down));
        assert_eq!(tb.select_end(), 15); // column restored

        // A horizontal move drops the preferred column.
        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Left));
        assert!(tb.current_x.is_none());
    }

    #[test]
    fn home_end_use_row_boundaries() {
        let (mut tb, mut rig) = focused_box("ab\ncdef");
        tb.edit.set_caret(5, false);

        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Home));
        assert_eq!(tb.select_end(), 3);
        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::End));
        assert_eq!(tb.select_end(), 7);
    }

    #[test]
    fn backspace_and_delete_remove_selection_first() {
        let (mut tb, mut rig) = focused_box("hello");
        tb.select(1, 4);
        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Backspace));
        assert_eq!(tb.text(), "ho");

        tb.edit.set_caret(1, false);
        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Delete));
        assert_eq!(tb.text(), "h");
    }

    #[test]
    fn enter_inserts_newline_in_multiline() {
        let (mut tb, mut rig) = focused_box("ab");
        tb.edit.set_caret(1, false);
        assert!(tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Enter)));
        assert_eq!(tb.text(), "a\nb");
    }

    #[test]
    fn enter_is_rejected_in_single_line() {
        let mut rig = Rig::new();
        let mut tb = TextBox::single_line("ab");
        tb.focus(&mut rig.ctx(), FocusRequest::BeginFocus);
        assert!(!tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Enter)));
        assert_eq!(tb.text(), "ab");
    }

    #[test]
    fn typed_text_replaces_selection() {
        let (mut tb, mut rig) = focused_box("hello");
        tb.select(0, 4);
        assert!(tb.text_input(&mut rig.ctx(), TextEvent::new('X')));
        assert_eq!(tb.text(), "Xo");
        assert_eq!(tb.select_end(), 1);
    }

    #[test]
    fn malformed_text_events_are_ignored() {
        let (mut tb, mut rig) = focused_box("ab");
        let ev = TextEvent {
            codepoint: 0,
            modifiers: Modifiers::empty(),
        };
        assert!(!tb.text_input(&mut rig.ctx(), ev));
        assert_eq!(tb.text(), "ab");
    }

    #[test]
    fn unfocused_box_ignores_keys_and_text() {
        let mut rig = Rig::new();
        let mut tb = TextBox::new("ab");
        assert!(!tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Backspace)));
        assert!(!tb.text_input(&mut rig.ctx(), TextEvent::new('x')));
        assert_eq!(tb.text(), "ab");
    }

    #[test]
    fn cut_copy_paste_through_clipboard() {
        let (mut tb, mut rig) = focused_box("hello world");

        // select [0,5) then cut => "hello" on the clipboard, " world" left.
        tb.select(0, 5);
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::X, Modifiers::action()),
        );
        assert_eq!(tb.text(), " world");
        assert_eq!(rig.clipboard.get(), "hello");

        // paste at caret k=0 => clipboard + buffer, caret past the insert.
        tb.edit.set_caret(0, false);
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::V, Modifiers::action()),
        );
        assert_eq!(tb.text(), "hello world");
        assert_eq!(tb.select_end(), 5);

        // copy leaves the buffer alone.
        tb.select(6, 11);
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::C, Modifiers::action()),
        );
        assert_eq!(rig.clipboard.get(), "world");
        assert_eq!(tb.text(), "hello world");
    }

    #[test]
    fn paste_of_empty_clipboard_is_a_no_op() {
        let (mut tb, mut rig) = focused_box("ab");
        let before = tb.edit().revision();
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::V, Modifiers::action()),
        );
        assert_eq!(tb.text(), "ab");
        assert_eq!(tb.edit().revision(), before);
    }

    #[test]
    fn select_all_chord() {
        let (mut tb, mut rig) = focused_box("hello");
        tb.key(
            &mut rig.ctx(),
            KeyEvent::press_with(KeyCode::A, Modifiers::action()),
        );
        assert_eq!(tb.edit().selected_text(), "hello");
    }

    #[test]
    fn escape_rolls_back_a_typing_burst() {
        let (mut tb, mut rig) = focused_box("draft");
        tb.text_input(&mut rig.ctx(), TextEvent::new('x'));
        tb.text_input(&mut rig.ctx(), TextEvent::new('y'));
        assert_eq!(tb.text(), "draftxy");

        assert!(tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Escape)));
        assert_eq!(tb.text(), "draft");

        // Nothing left to roll back.
        assert!(!tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Escape)));
    }

    #[test]
    fn resize_to_narrower_width_rewraps_rows() {
        let mut rig = Rig::new();
        let mut tb = TextBox::new("hello world");

        let mut cnv = RecordingCanvas::new();
        tb.draw(&mut rig.ctx(), &mut cnv);
        assert_eq!(cnv.texts(), vec!["hello world"]);

        // Narrow the box: stale single-row layout must not survive.
        rig.bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        cnv.clear();
        tb.draw(&mut rig.ctx(), &mut cnv);
        assert_eq!(cnv.texts(), vec!["hello ", "world"]);
    }

    #[test]
    fn draw_paints_selection_and_no_caret_while_selecting() {
        let (mut tb, mut rig) = focused_box("hello");
        tb.select(1, 3);

        let mut cnv = RecordingCanvas::new();
        tb.draw(&mut rig.ctx(), &mut cnv);

        let sel_fills = cnv.count(|c| {
            matches!(c, DrawCmd::FillStyle(color) if *color == rig.theme.selection_color)
        });
        assert_eq!(sel_fills, 1);

        let caret_fills = cnv
            .count(|c| matches!(c, DrawCmd::FillStyle(color) if *color == rig.theme.caret_color));
        assert_eq!(caret_fills, 0);
    }

    #[test]
    fn draw_paints_caret_when_collapsed_and_focused() {
        let (mut tb, mut rig) = focused_box("hello");
        let mut cnv = RecordingCanvas::new();
        tb.draw(&mut rig.ctx(), &mut cnv);

        let caret_fills = cnv
            .count(|c| matches!(c, DrawCmd::FillStyle(color) if *color == rig.theme.caret_color));
        assert_eq!(caret_fills, 1);
    }

    #[test]
    fn caret_moves_request_scroll_into_view() {
        let (mut tb, mut rig) = focused_box("hello world");
        tb.key(&mut rig.ctx(), KeyEvent::press(KeyCode::Left));
        let target = rig.requests.scroll_to.expect("scroll request");
        // Caret at offset 10 of 11: 100px into the text row.
        assert_eq!(target.x, 100.0);
        assert_eq!(target.height, 16.0);
    }

    #[test]
    fn hover_requests_ibeam_cursor() {
        let (mut tb, mut rig) = focused_box("hello");
        let tracked = tb.cursor(
            &mut rig.ctx(),
            Point::new(10.0, 4.0),
            CursorTracking::Hovering,
        );
        assert!(tracked);
        assert_eq!(rig.requests.cursor, Some(CursorType::IBeam));
    }
}
