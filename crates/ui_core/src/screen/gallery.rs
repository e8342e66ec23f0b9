//! Showcase of every factory widget, one per row.

use shared::{
    domain::{HorizontalAlign, WidgetId},
    error::StyleError,
    style::{FontSpec, Rgba, WidgetStyle},
};

use crate::{
    behavior::placeholder::BlurStyle,
    factory::{
        create_button, create_focus_text_field, create_glowing_label, create_label, create_panel,
        create_text_area, create_text_field, with_blur_style,
    },
    layout::{GridCell, Insets},
    screen::{Screen, ScreenBackground},
};

pub const SCREEN_TITLE: &str = "Style Gallery";

pub const PADDED_PANEL: WidgetId = WidgetId(101);
pub const HOVER_BUTTON: WidgetId = WidgetId(102);
pub const NAME_FIELD: WidgetId = WidgetId(103);
pub const STYLED_LABEL: WidgetId = WidgetId(104);
pub const TEXT_FIELD: WidgetId = WidgetId(105);
pub const ROUNDED_AREA: WidgetId = WidgetId(106);
pub const GLOWING_LABEL: WidgetId = WidgetId(107);

const ROW_GAP: Insets = Insets::new(5.0, 10.0, 5.0, 10.0);

pub fn compose_style_gallery() -> Result<Screen, StyleError> {
    let caption = create_label(
        "Custom panel with padding",
        &WidgetStyle::new()
            .with_font(FontSpec::new("Arial", 14.0))
            .with_text_color(Rgba::WHITE),
        HorizontalAlign::Center,
    )?;
    let panel = create_panel(Rgba::rgb(50, 50, 50), true, 20)?.with_child(caption);

    let hover_button = create_button(
        "Hover Me",
        &WidgetStyle::new()
            .with_font(FontSpec::new("Arial", 16.0).bold())
            .with_text_color(Rgba::WHITE)
            .with_background(Rgba::rgb(30, 144, 255)),
        Rgba::rgb(70, 130, 180),
        Some("This is a custom button"),
    )?;

    let name_field = create_focus_text_field(
        "Enter your name...",
        &WidgetStyle::new()
            .with_font(FontSpec::new("Arial", 14.0))
            .with_text_color(Rgba::WHITE)
            .with_background(Rgba::rgb(40, 40, 40))
            .with_caret(Rgba::CYAN),
        Rgba::rgb(30, 144, 255),
    )?;

    let styled_label = create_label(
        "Styled label",
        &WidgetStyle::new()
            .with_font(FontSpec::new("Serif", 18.0).italic())
            .with_text_color(Rgba::CYAN),
        HorizontalAlign::Center,
    )?;

    let text_field = with_blur_style(
        create_text_field(
            "Enter your text...",
            &WidgetStyle::new()
                .with_font(FontSpec::new("Arial", 16.0))
                .with_text_color(Rgba::WHITE)
                .with_placeholder_color(Rgba::GRAY)
                .with_background(Rgba::rgb(30, 30, 30))
                .with_caret(Rgba::CYAN)
                .with_border(Rgba::LIGHT_GRAY),
        )?,
        BlurStyle::Dim(Rgba::GRAY),
    );

    let rounded_area = create_text_area(
        "Rounded text area content...",
        &WidgetStyle::new()
            .with_font(FontSpec::new("SansSerif", 14.0))
            .with_text_color(Rgba::BLACK)
            .with_background(Rgba::LIGHT_GRAY)
            .with_border(Rgba::CYAN),
        15.0,
    )?;

    let glowing_label = create_glowing_label(
        "Glowing Label",
        &WidgetStyle::new()
            .with_font(FontSpec::new("Serif", 24.0).bold())
            .with_text_color(Rgba::WHITE),
        Rgba::CYAN,
    )?;

    let row = |r: u32| GridCell::at(r, 0).inset(ROW_GAP);
    Screen::builder(SCREEN_TITLE)
        .background(ScreenBackground::Solid(Rgba::DARK_GRAY))
        .place(PADDED_PANEL, panel, row(0))
        .place(HOVER_BUTTON, hover_button, row(1))
        .place(NAME_FIELD, name_field, row(2))
        .place(STYLED_LABEL, styled_label, row(3))
        .place(TEXT_FIELD, text_field, row(4))
        .place(ROUNDED_AREA, rounded_area, row(5))
        .place(GLOWING_LABEL, glowing_label, row(6))
        .build()
}
