//! Gallery of static visual elements: pure rendering, no state machines.

use crate::context::{Context, LimitsCtx};
use crate::element::Element;
use canvas::{
    draw_box_vgradient, draw_button_body, draw_icon, draw_menu_background, draw_panel, Canvas,
    TextAlign,
};
use core_types::{Color, Point, Rect, Size, ViewLimits, FULL_EXTENT};

/// Fills its bounds with a flat color.
pub struct BackgroundFill {
    pub color: Color,
}

impl BackgroundFill {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Element for BackgroundFill {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        cnv.fill_style(self.color);
        cnv.fill_rect(ctx.bounds);
    }
}

/// Centered heading text in the theme's heading font.
pub struct Heading {
    text: String,
    /// Scale factor applied to the theme's heading size.
    pub size: f32,
}

impl Heading {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 1.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Element for Heading {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let format = ctx
            .theme
            .heading_font
            .with_size(ctx.theme.heading_font.size * self.size);
        let size = Size::new(
            ctx.measurer.measure(&self.text, &format),
            ctx.measurer.line_height(&format),
        );
        ViewLimits::fixed(size)
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let format = ctx
            .theme
            .heading_font
            .with_size(ctx.theme.heading_font.size * self.size);

        cnv.save();
        cnv.fill_style(ctx.theme.heading_font_color);
        cnv.font(&format);
        cnv.text_align(TextAlign::CENTER | TextAlign::MIDDLE);
        cnv.fill_text(ctx.bounds.center(), &self.text);
        cnv.restore();
    }
}

/// Centered label text in the theme's label font.
pub struct Label {
    text: String,
    pub size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 1.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Element for Label {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let format = ctx
            .theme
            .label_font
            .with_size(ctx.theme.label_font.size * self.size);
        let size = Size::new(
            ctx.measurer.measure(&self.text, &format),
            ctx.measurer.line_height(&format),
        );
        ViewLimits::fixed(size)
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let format = ctx
            .theme
            .label_font
            .with_size(ctx.theme.label_font.size * self.size);

        cnv.save();
        cnv.fill_style(ctx.theme.label_font_color);
        cnv.font(&format);
        cnv.text_align(TextAlign::CENTER | TextAlign::MIDDLE);
        cnv.fill_text(ctx.bounds.center(), &self.text);
        cnv.restore();
    }
}

/// A raised panel in the theme's panel color.
#[derive(Default)]
pub struct Panel;

impl Element for Panel {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        draw_panel(cnv, ctx.bounds, ctx.theme.panel_color, 4.0);
    }
}

/// A thin outline frame.
#[derive(Default)]
pub struct Frame;

impl Element for Frame {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let thm = ctx.theme;

        cnv.line_width(thm.frame_stroke_width);
        cnv.stroke_style(Color::BLACK.opacity(0.4));
        cnv.stroke_round_rect(
            ctx.bounds.translate(-1.0, -1.0),
            thm.frame_corner_radius,
        );
        cnv.stroke_style(thm.frame_color);
        cnv.stroke_round_rect(ctx.bounds, thm.frame_corner_radius);
    }
}

/// A window title bar strip.
#[derive(Default)]
pub struct TitleBar;

impl Element for TitleBar {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        draw_box_vgradient(cnv, ctx.bounds, ctx.theme.panel_color, 4.0);
    }
}

/// A single icon glyph from the theme's icon font.
pub struct Icon {
    pub code: u32,
    /// Size override in px; 0 uses the theme's icon size.
    pub size: f32,
}

impl Icon {
    pub fn new(code: u32) -> Self {
        Self { code, size: 0.0 }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    fn font_size(&self, theme: &core_types::Theme) -> f32 {
        if self.size > 0.0 {
            self.size
        } else {
            theme.icon_font.size
        }
    }
}

impl Element for Icon {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        let px = self.font_size(ctx.theme);
        ViewLimits::fixed(Size::new(px, px))
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let format = ctx.theme.icon_font.with_size(self.font_size(ctx.theme));
        draw_icon(cnv, ctx.bounds, self.code, &format, ctx.theme.icon_color);
    }
}

/// Backdrop for popup menus.
#[derive(Default)]
pub struct MenuBackground;

impl Element for MenuBackground {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        draw_menu_background(cnv, ctx.bounds, ctx.theme.panel_color, 5.0);
    }
}

/// Horizontal separator line between menu items.
#[derive(Default)]
pub struct MenuItemSpacer;

impl Element for MenuItemSpacer {
    fn limits(&self, ctx: &LimitsCtx) -> ViewLimits {
        ViewLimits {
            min: Size::ZERO,
            max: Size::new(FULL_EXTENT, ctx.theme.label_font.size),
        }
    }

    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let y = ctx.bounds.y + ctx.bounds.height / 2.0;
        cnv.stroke_style(ctx.theme.frame_color.opacity(0.15));
        cnv.line_width(1.0);
        cnv.line(
            Point::new(ctx.bounds.x, y),
            Point::new(ctx.bounds.right(), y),
        );
    }
}

/// The recessed backdrop behind editable text.
#[derive(Default)]
pub struct InputPanel;

impl Element for InputPanel {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let thm = ctx.theme;
        let bounds = ctx.bounds;
        let radius = 3.5;

        cnv.line_width(1.5);
        cnv.stroke_style(Color::WHITE.opacity(0.3));
        cnv.stroke_round_rect(bounds, radius);

        cnv.stroke_style(Color::BLACK.opacity(0.5));
        cnv.line_width(1.0);
        cnv.stroke_round_rect(bounds.translate(-1.0, -1.0), radius);

        cnv.fill_style(thm.edit_box_fill_color.opacity(0.9));
        cnv.fill_round_rect(bounds.translate(-0.5, -0.5), radius);
    }
}

/// Horizontal grid lines for meter-style backgrounds.
pub struct VGridLines {
    pub major_divisions: u32,
    pub minor_divisions: u32,
}

impl VGridLines {
    pub fn new(major_divisions: u32, minor_divisions: u32) -> Self {
        Self {
            major_divisions: major_divisions.max(1),
            minor_divisions: minor_divisions.max(1),
        }
    }

    fn rule(
        cnv: &mut dyn Canvas,
        bounds: Rect,
        divisions: u32,
        color: Color,
        width: f32,
    ) {
        let incr = bounds.height / divisions as f32;
        let mut pos = bounds.y;
        while pos <= bounds.bottom() + 1.0 {
            cnv.stroke_style(color);
            cnv.line_width(width);
            cnv.line(Point::new(bounds.x, pos), Point::new(bounds.right(), pos));
            pos += incr;
        }
    }
}

impl Element for VGridLines {
    fn draw(&mut self, ctx: &mut Context, cnv: &mut dyn Canvas) {
        let thm = ctx.theme;
        Self::rule(
            cnv,
            ctx.bounds,
            self.major_divisions,
            thm.major_grid_color,
            thm.major_grid_width,
        );
        Self::rule(
            cnv,
            ctx.bounds,
            self.minor_divisions,
            thm.minor_grid_color,
            thm.minor_grid_width,
        );
    }
}

/// Paint a check box with its label; `state`/`hilite` pick the colors.
pub fn draw_check_box(
    ctx: &mut Context,
    cnv: &mut dyn Canvas,
    text: &str,
    state: bool,
    hilite: bool,
) {
    let thm = ctx.theme;
    let mut box_ = ctx.bounds;
    box_.width = box_.height;

    let mut fill = if state {
        thm.indicator_color.level(1.5)
    } else {
        Color::rgba8(0, 0, 0, 32)
    };
    if state && hilite {
        fill = fill.level(1.3);
    }

    cnv.fill_style(fill);
    cnv.fill_round_rect(box_.inset(1.0, 1.0), 3.0);

    if !state {
        let outline = if hilite {
            thm.frame_color
        } else {
            Color::rgba8(0, 0, 0, 48)
        };
        cnv.stroke_style(outline);
        cnv.stroke_round_rect(box_.inset(1.0, 1.0), 3.0);
    }

    cnv.save();
    cnv.fill_style(thm.label_font_color);
    cnv.font(&thm.label_font);
    cnv.text_align(TextAlign::LEFT | TextAlign::MIDDLE);
    cnv.fill_text(
        Point::new(box_.right() + 8.0, ctx.bounds.y + ctx.bounds.height / 2.0),
        text,
    );
    cnv.restore();
}

/// Paint an icon button face; `state`/`hilite` pick the body level.
pub fn draw_icon_button(
    ctx: &mut Context,
    cnv: &mut dyn Canvas,
    code: u32,
    size: f32,
    state: bool,
    hilite: bool,
) {
    let thm = ctx.theme;
    let indicator = thm.indicator_color.level(0.7);

    let body = if state {
        indicator.level(2.0)
    } else if hilite {
        indicator.level(1.5)
    } else {
        indicator
    };
    draw_button_body(cnv, ctx.bounds, body, 6.0);

    let icon_color = if state {
        indicator.level(4.0)
    } else {
        indicator.level(0.2)
    };
    let format = thm.icon_font.with_size(size);
    draw_icon(
        cnv,
        ctx.bounds.translate(0.5, 0.5),
        code,
        &format,
        icon_color,
    );
}
