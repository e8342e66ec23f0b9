//! Styled-widget factory.
//!
//! Each `create_*` call resolves a [`WidgetStyle`], builds one widget model
//! with its behaviors already attached, and returns it ready to mount. No
//! layout placement happens here. A missing font or color fails the call.

use shared::{
    domain::{CursorKind, HorizontalAlign},
    error::StyleError,
    style::{FontSpec, Rgba, WidgetStyle},
};

use crate::{
    behavior::{
        hover_focus::{DecorationColors, HoverFocusBehavior},
        placeholder::{BlurStyle, PlaceholderBehavior},
        DecorationSurface, TextSurface, WidgetEvents,
    },
    paint::{validate_radius, GlowDecoration, RoundedBackground, GLOW_CORNER_RADIUS},
};

pub const DEFAULT_BORDER_WIDTH: f32 = 2.0;
/// Inner spacing between a text area's border and its text.
pub const TEXT_AREA_PADDING: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    text: String,
    foreground: Rgba,
}

impl TextSurface for TextContent {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn set_foreground(&mut self, color: Rgba) {
        self.foreground = color;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: f32,
    pub cursor: CursorKind,
}

impl DecorationSurface for Decoration {
    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn set_border(&mut self, color: Rgba) {
        self.border = color;
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.cursor = cursor;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldHandle {
    font: FontSpec,
    content: TextContent,
    caret: Rgba,
    align: HorizontalAlign,
    decoration: Decoration,
    placeholder: Option<PlaceholderBehavior>,
    hover_focus: Option<HoverFocusBehavior>,
    focused: bool,
}

impl TextFieldHandle {
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn text(&self) -> &str {
        &self.content.text
    }

    pub fn foreground(&self) -> Rgba {
        self.content.foreground
    }

    pub fn caret(&self) -> Rgba {
        self.caret
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn placeholder(&self) -> Option<&PlaceholderBehavior> {
        self.placeholder.as_ref()
    }

    pub fn hover_focus(&self) -> Option<&HoverFocusBehavior> {
        self.hover_focus.as_ref()
    }

    pub fn is_showing_placeholder(&self) -> bool {
        self.placeholder
            .as_ref()
            .is_some_and(PlaceholderBehavior::is_showing_placeholder)
    }

    /// What the user has entered; empty while the hint is showing.
    pub fn user_text(&self) -> &str {
        if self.is_showing_placeholder() {
            ""
        } else {
            &self.content.text
        }
    }

    /// Replaces the content as the user edits it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.placeholder.as_mut() {
            Some(placeholder) => placeholder.content_edited(text, &mut self.content),
            None => self.content.text = text,
        }
    }

    pub fn type_text(&mut self, typed: &str) {
        let text = format!("{}{typed}", self.user_text());
        self.set_text(text);
    }

    pub fn attach_placeholder(&mut self, mut behavior: PlaceholderBehavior) -> Result<(), StyleError> {
        if self.placeholder.is_some() {
            return Err(StyleError::BehaviorAlreadyAttached {
                behavior: "placeholder",
            });
        }
        behavior.install(&mut self.content);
        self.placeholder = Some(behavior);
        Ok(())
    }

    pub fn attach_hover_focus(&mut self, mut behavior: HoverFocusBehavior) -> Result<(), StyleError> {
        if self.hover_focus.is_some() {
            return Err(StyleError::BehaviorAlreadyAttached {
                behavior: "hover/focus",
            });
        }
        behavior.install(&mut self.decoration);
        self.hover_focus = Some(behavior);
        Ok(())
    }
}

impl WidgetEvents for TextFieldHandle {
    fn on_focus_change(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        if let Some(placeholder) = self.placeholder.as_mut() {
            placeholder.on_focus_change(focused, &mut self.content);
        }
        if let Some(hover_focus) = self.hover_focus.as_mut() {
            hover_focus.focus_changed(focused, &mut self.decoration);
        }
    }

    fn on_pointer_enter(&mut self) {
        if let Some(hover_focus) = self.hover_focus.as_mut() {
            hover_focus.pointer_entered(&mut self.decoration);
        }
    }

    fn on_pointer_exit(&mut self) {
        if let Some(hover_focus) = self.hover_focus.as_mut() {
            hover_focus.pointer_exited(&mut self.decoration);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaHandle {
    font: FontSpec,
    text: String,
    foreground: Rgba,
    border: Rgba,
    border_width: f32,
    background: RoundedBackground,
}

impl TextAreaHandle {
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    pub fn border(&self) -> Rgba {
        self.border
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn padding(&self) -> f32 {
        TEXT_AREA_PADDING
    }

    /// Painted behind the text before the default text rendering runs.
    pub fn background(&self) -> &RoundedBackground {
        &self.background
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelHandle {
    text: String,
    font: FontSpec,
    text_color: Rgba,
    align: HorizontalAlign,
    glow: Option<GlowDecoration>,
}

impl LabelHandle {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    pub fn glow(&self) -> Option<&GlowDecoration> {
        self.glow.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonHandle {
    text: String,
    font: FontSpec,
    foreground: Rgba,
    tooltip: Option<String>,
    decoration: Decoration,
    hover_focus: HoverFocusBehavior,
}

impl ButtonHandle {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn hover_focus(&self) -> &HoverFocusBehavior {
        &self.hover_focus
    }

    pub fn is_hovered(&self) -> bool {
        self.hover_focus.hover_state().is_hovered
    }

    pub fn is_focused(&self) -> bool {
        self.hover_focus.hover_state().is_focused
    }
}

impl WidgetEvents for ButtonHandle {
    fn on_focus_change(&mut self, focused: bool) {
        if self.is_focused() != focused {
            self.hover_focus.focus_changed(focused, &mut self.decoration);
        }
    }

    fn on_pointer_enter(&mut self) {
        if !self.is_hovered() {
            self.hover_focus.pointer_entered(&mut self.decoration);
        }
    }

    fn on_pointer_exit(&mut self) {
        if self.is_hovered() {
            self.hover_focus.pointer_exited(&mut self.decoration);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelHandle {
    background: Rgba,
    opaque: bool,
    padding: u16,
    children: Vec<crate::screen::Widget>,
}

impl PanelHandle {
    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Background actually painted; a non-opaque panel paints nothing.
    pub fn painted_background(&self) -> Option<Rgba> {
        self.opaque.then_some(self.background)
    }

    /// Uniform padding applied to all four sides.
    pub fn padding(&self) -> u16 {
        self.padding
    }

    pub fn children(&self) -> &[crate::screen::Widget] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [crate::screen::Widget] {
        &mut self.children
    }

    pub fn with_child(mut self, child: impl Into<crate::screen::Widget>) -> Self {
        self.children.push(child.into());
        self
    }
}

fn border_width(style: &WidgetStyle) -> f32 {
    style
        .border_width
        .filter(|w| w.is_finite())
        .map_or(DEFAULT_BORDER_WIDTH, |w| w.max(0.0))
}

fn base_text_field(placeholder: &str, style: &WidgetStyle, widget: &str) -> Result<TextFieldHandle, StyleError> {
    let font = style.require_font(widget)?;
    let text_color = style.require_text_color(widget)?;
    let background = style.require_background(widget)?;
    let border = style.require_border(widget)?;
    let caret = style.require_caret(widget)?;
    let placeholder_color = style.placeholder_color.unwrap_or(Rgba::GRAY);

    let mut field = TextFieldHandle {
        font,
        content: TextContent {
            text: String::new(),
            foreground: text_color,
        },
        caret,
        align: HorizontalAlign::Center,
        decoration: Decoration {
            background,
            border,
            border_width: border_width(style),
            cursor: CursorKind::Default,
        },
        placeholder: None,
        hover_focus: None,
        focused: false,
    };
    field.attach_placeholder(PlaceholderBehavior::new(
        placeholder,
        placeholder_color,
        text_color,
    ))?;
    Ok(field)
}

/// Single-line input that starts out showing `placeholder`.
///
/// Requires `font`, `text_color`, `background_color`, `border_color` and
/// `caret_color`; `placeholder_color` defaults to gray.
pub fn create_text_field(placeholder: &str, style: &WidgetStyle) -> Result<TextFieldHandle, StyleError> {
    let field = base_text_field(placeholder, style, "text field")?;
    tracing::debug!(placeholder, "created text field");
    Ok(field)
}

/// Left-aligned [`create_text_field`] variant that paints `focus_border`
/// while focused. The rest border is the background darkened.
pub fn create_focus_text_field(
    placeholder: &str,
    style: &WidgetStyle,
    focus_border: Rgba,
) -> Result<TextFieldHandle, StyleError> {
    let widget = "focus text field";
    let background = style.require_background(widget)?;
    let rest_border = background.darker();
    let style = style.clone().or(&WidgetStyle::new().with_border(rest_border));
    let mut field = base_text_field(placeholder, &style, widget)?;
    field.align = HorizontalAlign::Left;
    field.attach_hover_focus(HoverFocusBehavior::focus_only(
        background,
        rest_border,
        focus_border,
    ))?;
    tracing::debug!(placeholder, "created focus text field");
    Ok(field)
}

/// Sets the blur styling of an already-built text field's placeholder.
pub fn with_blur_style(mut field: TextFieldHandle, blur_style: BlurStyle) -> TextFieldHandle {
    field.placeholder = field
        .placeholder
        .take()
        .map(|behavior| behavior.with_blur_style(blur_style));
    field
}

/// Multi-line input over a rounded background; radius 0 is a rectangle.
pub fn create_text_area(
    initial_text: &str,
    style: &WidgetStyle,
    corner_radius: f32,
) -> Result<TextAreaHandle, StyleError> {
    let widget = "text area";
    let font = style.require_font(widget)?;
    let foreground = style.require_text_color(widget)?;
    let background = style.require_background(widget)?;
    let border = style.require_border(widget)?;
    let corner_radius = validate_radius("corner radius", corner_radius)?;

    Ok(TextAreaHandle {
        font,
        text: initial_text.to_string(),
        foreground,
        border,
        border_width: border_width(style),
        background: RoundedBackground::new(background, corner_radius)?,
    })
}

pub fn create_label(
    text: &str,
    style: &WidgetStyle,
    align: HorizontalAlign,
) -> Result<LabelHandle, StyleError> {
    let widget = "label";
    Ok(LabelHandle {
        text: text.to_string(),
        font: style.require_font(widget)?,
        text_color: style.require_text_color(widget)?,
        align,
        glow: None,
    })
}

/// Centered label with a six-ring outward glow drawn beneath the text.
pub fn create_glowing_label(
    text: &str,
    style: &WidgetStyle,
    glow_color: Rgba,
) -> Result<LabelHandle, StyleError> {
    let corner_radius = style.corner_radius.unwrap_or(GLOW_CORNER_RADIUS);
    let glow = GlowDecoration::new(glow_color, corner_radius)?;
    let mut label = create_label(text, style, HorizontalAlign::Center)?;
    label.glow = Some(glow);
    Ok(label)
}

/// Flat button with hover background, focus border and optional tooltip.
///
/// The rest border is the background darkened; the focus border is
/// `border_color` when set, otherwise the text color.
pub fn create_button(
    text: &str,
    style: &WidgetStyle,
    hover_color: Rgba,
    tooltip: Option<&str>,
) -> Result<ButtonHandle, StyleError> {
    let widget = "button";
    let font = style.require_font(widget)?;
    let foreground = style.require_text_color(widget)?;
    let background = style.require_background(widget)?;
    let rest_border = background.darker();
    let colors = DecorationColors {
        rest_background: background,
        hover_background: hover_color,
        rest_border,
        focus_border: style.border_color.unwrap_or(foreground),
    };

    let mut decoration = Decoration {
        background,
        border: rest_border,
        border_width: border_width(style),
        cursor: CursorKind::Default,
    };
    let mut hover_focus = HoverFocusBehavior::new(colors);
    hover_focus.install(&mut decoration);

    tracing::debug!(text, "created button");
    Ok(ButtonHandle {
        text: text.to_string(),
        font,
        foreground,
        tooltip: tooltip.map(str::to_string).or_else(|| style.tooltip.clone()),
        decoration,
        hover_focus,
    })
}

pub fn create_panel(background: Rgba, is_opaque: bool, padding: i32) -> Result<PanelHandle, StyleError> {
    let padding = u16::try_from(padding).map_err(|_| StyleError::InvalidPadding { value: padding })?;
    Ok(PanelHandle {
        background,
        opaque: is_opaque,
        padding,
        children: Vec::new(),
    })
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;
