use super::*;
use crate::behavior::hover_focus::DecorationState;
use crate::paint::{PaintDecoration, PaintPrimitive, RectF};

fn field_style() -> WidgetStyle {
    WidgetStyle::new()
        .with_font(FontSpec::new("Arial", 16.0).bold())
        .with_text_color(Rgba::WHITE)
        .with_background(Rgba::rgb(50, 50, 50))
        .with_caret(Rgba::CYAN)
        .with_border(Rgba::rgb(70, 130, 180))
}

fn button_style() -> WidgetStyle {
    WidgetStyle::new()
        .with_font(FontSpec::new("Arial", 16.0))
        .with_text_color(Rgba::WHITE)
        .with_background(Rgba::rgb(30, 144, 255))
}

#[test]
fn text_field_starts_in_placeholder_state() {
    let field = create_text_field("Enter your text...", &field_style()).expect("field");
    assert_eq!(field.text(), "Enter your text...");
    assert_eq!(field.foreground(), Rgba::GRAY);
    assert!(field.is_showing_placeholder());
    assert_eq!(field.decoration().border_width, DEFAULT_BORDER_WIDTH);
    assert_eq!(field.align(), HorizontalAlign::Center);
}

#[test]
fn text_field_uses_configured_placeholder_color() {
    let style = field_style().with_placeholder_color(Rgba::LIGHT_GRAY);
    let field = create_text_field("hint", &style).expect("field");
    assert_eq!(field.foreground(), Rgba::LIGHT_GRAY);
}

#[test]
fn text_field_refuses_missing_font_or_color() {
    let mut style = field_style();
    style.font = None;
    assert!(matches!(
        create_text_field("hint", &style),
        Err(StyleError::MissingFont { .. })
    ));

    let mut style = field_style();
    style.caret_color = None;
    assert_eq!(
        create_text_field("hint", &style).unwrap_err(),
        StyleError::missing_color("text field", "caret_color")
    );
}

#[test]
fn placeholder_cannot_be_attached_twice() {
    let mut field = create_text_field("hint", &field_style()).expect("field");
    let err = field
        .attach_placeholder(PlaceholderBehavior::new("other", Rgba::GRAY, Rgba::WHITE))
        .unwrap_err();
    assert_eq!(err, StyleError::BehaviorAlreadyAttached { behavior: "placeholder" });
    assert_eq!(field.text(), "hint");
}

#[test]
fn repeated_focus_events_are_collapsed() {
    let mut field = create_text_field("hint", &field_style()).expect("field");
    field.on_focus_change(true);
    field.type_text("x");
    field.on_focus_change(true);
    assert_eq!(field.text(), "x");
}

#[test]
fn text_set_while_hint_shows_survives_focus() {
    let mut field = create_text_field("Enter your text...", &field_style()).expect("field");
    field.set_text("hello");
    assert!(!field.is_showing_placeholder());
    assert_eq!(field.foreground(), Rgba::WHITE);

    field.on_focus_change(true);
    assert_eq!(field.text(), "hello");
    field.on_focus_change(false);
    assert_eq!(field.text(), "hello");
}

#[test]
fn typing_over_hint_does_not_append_to_it() {
    let mut field = create_text_field("hint", &field_style()).expect("field");
    assert_eq!(field.user_text(), "");
    field.type_text("abc");
    assert_eq!(field.text(), "abc");
    assert_eq!(field.user_text(), "abc");
}

#[test]
fn focus_text_field_swaps_border_on_focus() {
    let field_bg = Rgba::rgb(40, 40, 40);
    let style = WidgetStyle::new()
        .with_font(FontSpec::new("Arial", 14.0))
        .with_text_color(Rgba::WHITE)
        .with_background(field_bg)
        .with_caret(Rgba::CYAN);
    let mut field =
        create_focus_text_field("Enter your name...", &style, Rgba::rgb(30, 144, 255)).expect("field");
    assert_eq!(field.decoration().border, field_bg.darker());
    assert_eq!(field.align(), HorizontalAlign::Left);

    field.on_focus_change(true);
    assert_eq!(field.decoration().border, Rgba::rgb(30, 144, 255));
    assert_eq!(field.text(), "");

    field.on_focus_change(false);
    assert_eq!(field.decoration().border, field_bg.darker());
    assert_eq!(field.text(), "Enter your name...");
}

#[test]
fn text_area_paints_rounded_background_behind_text() {
    let style = WidgetStyle::new()
        .with_font(FontSpec::new("SansSerif", 14.0))
        .with_text_color(Rgba::BLACK)
        .with_background(Rgba::LIGHT_GRAY)
        .with_border(Rgba::CYAN);
    let area = create_text_area("Rounded text area content...", &style, 15.0).expect("area");
    assert_eq!(area.text(), "Rounded text area content...");
    assert_eq!(area.padding(), TEXT_AREA_PADDING);
    let prims = area.background().primitives(RectF::from_size(300.0, 100.0));
    assert!(matches!(
        prims.as_slice(),
        [PaintPrimitive::FillRoundedRect { radius, color, .. }] if *radius == 15.0 && *color == Rgba::LIGHT_GRAY
    ));
}

#[test]
fn text_area_rejects_negative_radius() {
    let style = WidgetStyle::new()
        .with_font(FontSpec::new("SansSerif", 14.0))
        .with_text_color(Rgba::BLACK)
        .with_background(Rgba::LIGHT_GRAY)
        .with_border(Rgba::CYAN);
    assert!(matches!(
        create_text_area("", &style, -3.0),
        Err(StyleError::InvalidRadius { .. })
    ));
}

#[test]
fn glowing_label_is_centered_and_carries_glow() {
    let style = WidgetStyle::new()
        .with_font(FontSpec::new("Serif", 24.0).bold())
        .with_text_color(Rgba::WHITE);
    let label = create_glowing_label("Glowing Label", &style, Rgba::CYAN).expect("label");
    assert_eq!(label.align(), HorizontalAlign::Center);
    let glow = label.glow().expect("glow");
    assert_eq!(glow.color(), Rgba::CYAN);
    assert_eq!(glow.corner_radius(), GLOW_CORNER_RADIUS);
}

#[test]
fn glowing_label_rejects_negative_glow_radius() {
    let style = WidgetStyle::new()
        .with_font(FontSpec::new("Serif", 24.0))
        .with_text_color(Rgba::WHITE)
        .with_corner_radius(-1.0);
    assert!(create_glowing_label("x", &style, Rgba::CYAN).is_err());
}

#[test]
fn button_decorates_hover_and_focus_independently() {
    let mut button =
        create_button("Hover Me", &button_style(), Rgba::rgb(70, 130, 180), Some("This is a custom button"))
            .expect("button");
    assert_eq!(button.tooltip(), Some("This is a custom button"));
    assert_eq!(button.decoration().border, Rgba::rgb(21, 100, 178));

    button.on_pointer_enter();
    assert_eq!(button.decoration().background, Rgba::rgb(70, 130, 180));
    assert_eq!(button.decoration().cursor, CursorKind::PointingHand);

    button.on_focus_change(true);
    assert_eq!(button.decoration().border, Rgba::WHITE);
    assert_eq!(button.hover_focus().state(), DecorationState::Focused);

    button.on_focus_change(false);
    assert_eq!(button.decoration().background, Rgba::rgb(70, 130, 180));
    assert_eq!(button.decoration().border, Rgba::rgb(21, 100, 178));

    button.on_pointer_exit();
    assert_eq!(button.decoration().background, Rgba::rgb(30, 144, 255));
    assert_eq!(button.decoration().cursor, CursorKind::Default);
}

#[test]
fn button_tooltip_falls_back_to_style() {
    let style = button_style().with_tooltip("from style");
    let button = create_button("b", &style, Rgba::BLUE, None).expect("button");
    assert_eq!(button.tooltip(), Some("from style"));
}

#[test]
fn panel_paints_background_only_when_opaque() {
    let panel = create_panel(Rgba::rgb(50, 50, 50), true, 20).expect("panel");
    assert_eq!(panel.padding(), 20);
    assert_eq!(panel.painted_background(), Some(Rgba::rgb(50, 50, 50)));

    let clear = create_panel(Rgba::rgb(50, 50, 50), false, 0).expect("panel");
    assert_eq!(clear.painted_background(), None);

    assert_eq!(
        create_panel(Rgba::BLACK, true, -4).unwrap_err(),
        StyleError::InvalidPadding { value: -4 }
    );
}
