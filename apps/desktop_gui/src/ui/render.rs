//! Draws a [`Screen`] with egui and reports what the user did to it.
//!
//! Rendering only reads the screen model. Focus, hover, activation and
//! edits are returned as [`WidgetInput`]s for the controller to apply after
//! the frame, which keeps the model's state machines the single source of
//! truth for colors and text.

use std::sync::Arc;

use eframe::egui;
use shared::{
    domain::WidgetId,
    style::{FontSpec, Rgba},
};
use ui_core::{
    layout::{LayoutEntry, LayoutRow},
    paint::{PaintDecoration, PaintPrimitive},
    ButtonHandle, LabelHandle, PanelHandle, Screen, ScreenBackground, TextAreaHandle,
    TextFieldHandle, Widget,
};

use crate::controller::events::WidgetInput;
use crate::ui::theme::{
    align, color32, cursor_icon, font_id, margin, rect_f, rich_text, shapes, uniform_margin,
};

pub type FrameInputs = Vec<(WidgetId, WidgetInput)>;

const BUTTON_PADDING: egui::Vec2 = egui::vec2(18.0, 8.0);
const GLOW_PADDING: egui::Vec2 = egui::vec2(28.0, 14.0);
const FIELD_MARGIN: egui::Margin = egui::Margin::symmetric(8, 6);
const TEXT_AREA_ROWS: usize = 4;

pub fn show_screen(ctx: &egui::Context, screen: &Screen) -> FrameInputs {
    let mut inputs = FrameInputs::new();
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            paint_background(ui, screen.background());
            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in screen.layout().rows() {
                    show_row(ui, screen, &row, &mut inputs);
                }
            });
        });
    inputs
}

fn paint_background(ui: &mut egui::Ui, background: ScreenBackground) {
    let bounds = rect_f(ui.max_rect());
    let primitives = match background {
        ScreenBackground::Solid(color) => vec![PaintPrimitive::FillRoundedRect {
            rect: bounds,
            radius: 0.0,
            color,
        }],
        ScreenBackground::Gradient(gradient) => gradient.primitives(bounds),
    };
    ui.painter().add(shapes(&primitives));
}

fn show_row(ui: &mut egui::Ui, screen: &Screen, row: &LayoutRow<'_>, inputs: &mut FrameInputs) {
    let layout = screen.layout();
    match row.entries.as_slice() {
        [entry] if layout.spans_full_width(entry) => show_cell(ui, screen, entry, inputs),
        entries => {
            let columns = layout.column_count().max(1) as usize;
            ui.columns(columns, |cols| {
                for entry in entries {
                    let column = (entry.cell.column as usize).min(columns - 1);
                    show_cell(&mut cols[column], screen, entry, inputs);
                }
            });
        }
    }
}

fn show_cell(ui: &mut egui::Ui, screen: &Screen, entry: &LayoutEntry, inputs: &mut FrameInputs) {
    let Some(widget) = screen.widget(entry.widget) else {
        tracing::warn!(widget = entry.widget.0, "layout entry without widget");
        return;
    };
    egui::Frame::new()
        .inner_margin(margin(entry.cell.insets))
        .show(ui, |ui| {
            ui.with_layout(
                egui::Layout::top_down(align(entry.cell.anchor.horizontal())),
                |ui| show_widget(ui, entry.widget, widget, inputs),
            );
        });
}

fn show_widget(ui: &mut egui::Ui, id: WidgetId, widget: &Widget, inputs: &mut FrameInputs) {
    match widget {
        Widget::TextField(field) => show_text_field(ui, id, field, inputs),
        Widget::TextArea(area) => show_text_area(ui, id, area, inputs),
        Widget::Label(label) => show_label(ui, label),
        Widget::Button(button) => show_button(ui, id, button, inputs),
        Widget::Panel(panel) => show_panel(ui, id, panel),
    }
}

fn text_galley(ui: &egui::Ui, text: &str, font: &FontSpec, color: Rgba) -> Arc<egui::Galley> {
    egui::WidgetText::from(rich_text(text, font, color)).into_galley(
        ui,
        Some(egui::TextWrapMode::Extend),
        f32::INFINITY,
        egui::FontSelection::Default,
    )
}

fn show_label(ui: &mut egui::Ui, label: &LabelHandle) {
    let galley = text_galley(ui, label.text(), label.font(), label.text_color());
    let padding = if label.glow().is_some() {
        GLOW_PADDING
    } else {
        egui::Vec2::ZERO
    };
    let (rect, _) = ui.allocate_exact_size(galley.size() + 2.0 * padding, egui::Sense::hover());
    if let Some(glow) = label.glow() {
        ui.painter().add(shapes(&glow.primitives(rect_f(rect))));
    }
    let text_rect = egui::Align2::CENTER_CENTER.anchor_size(rect.center(), galley.size());
    ui.painter()
        .galley(text_rect.min, galley, color32(label.text_color()));
}

fn show_button(ui: &mut egui::Ui, id: WidgetId, button: &ButtonHandle, inputs: &mut FrameInputs) {
    let galley = text_galley(ui, button.text(), button.font(), button.foreground());
    let decoration = button.decoration();
    let (rect, mut response) = ui.allocate_exact_size(
        galley.size() + 2.0 * BUTTON_PADDING,
        egui::Sense::click(),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::ZERO, color32(decoration.background));
    painter.rect_stroke(
        rect,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(decoration.border_width, color32(decoration.border)),
        egui::StrokeKind::Inside,
    );
    let text_rect = egui::Align2::CENTER_CENTER.anchor_size(rect.center(), galley.size());
    painter.galley(text_rect.min, galley, color32(button.foreground()));

    response = response.on_hover_cursor(cursor_icon(decoration.cursor));
    if let Some(tooltip) = button.tooltip() {
        response = response.on_hover_text(tooltip);
    }
    if response.clicked() {
        response.request_focus();
    }

    report_pointer(id, response.hovered(), button.is_hovered(), inputs);
    report_focus(id, response.has_focus(), button.is_focused(), inputs);
    if response.clicked() {
        inputs.push((id, WidgetInput::Activated));
    }
}

fn show_text_field(ui: &mut egui::Ui, id: WidgetId, field: &TextFieldHandle, inputs: &mut FrameInputs) {
    let decoration = field.decoration();
    let mut buffer = field.user_text().to_owned();
    let hint = field
        .placeholder()
        .filter(|_| field.is_showing_placeholder())
        .map(|p| rich_text(p.placeholder(), field.font(), p.placeholder_color()))
        .unwrap_or_default();
    let width = ui.available_width().min(360.0);

    let response = egui::Frame::new()
        .fill(color32(decoration.background))
        .stroke(egui::Stroke::new(
            decoration.border_width,
            color32(decoration.border),
        ))
        .inner_margin(FIELD_MARGIN)
        .show(ui, |ui| {
            ui.visuals_mut().text_cursor.stroke.color = color32(field.caret());
            ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .id_salt(("text_field", id.0))
                    .font(font_id(field.font()))
                    .text_color(color32(field.foreground()))
                    .hint_text(hint)
                    .horizontal_align(align(field.align()))
                    .frame(false)
                    .desired_width(width),
            )
        })
        .inner
        .on_hover_cursor(cursor_icon(decoration.cursor));

    if let Some(hover_focus) = field.hover_focus() {
        report_pointer(id, response.hovered(), hover_focus.hover_state().is_hovered, inputs);
    }
    report_focus(id, response.has_focus(), field.is_focused(), inputs);
    if response.changed() {
        inputs.push((id, WidgetInput::TextEdited(buffer)));
    }
}

fn show_text_area(ui: &mut egui::Ui, id: WidgetId, area: &TextAreaHandle, inputs: &mut FrameInputs) {
    let mut buffer = area.text().to_owned();
    let background_slot = ui.painter().add(egui::Shape::Noop);

    let response = ui.add(
        egui::TextEdit::multiline(&mut buffer)
            .id_salt(("text_area", id.0))
            .font(font_id(area.font()))
            .text_color(color32(area.foreground()))
            .frame(false)
            .margin(uniform_margin(area.padding()))
            .desired_rows(TEXT_AREA_ROWS)
            .desired_width(ui.available_width().min(420.0)),
    );

    let bounds = rect_f(response.rect);
    let mut primitives = area.background().primitives(bounds);
    primitives.push(PaintPrimitive::StrokeRoundedRect {
        rect: bounds,
        radius: area.background().radius(),
        width: area.border_width(),
        color: area.border(),
    });
    ui.painter().set(background_slot, shapes(&primitives));

    if response.changed() {
        inputs.push((id, WidgetInput::TextEdited(buffer)));
    }
}

/// Panel children carry no widget id; their input is not routed.
fn show_panel(ui: &mut egui::Ui, id: WidgetId, panel: &PanelHandle) {
    let fill = panel
        .painted_background()
        .map_or(egui::Color32::TRANSPARENT, color32);
    egui::Frame::new()
        .fill(fill)
        .inner_margin(uniform_margin(f32::from(panel.padding())))
        .show(ui, |ui| {
            let mut ignored = FrameInputs::new();
            for child in panel.children() {
                show_widget(ui, id, child, &mut ignored);
            }
        });
}

fn report_pointer(id: WidgetId, hovered_now: bool, hovered_before: bool, inputs: &mut FrameInputs) {
    match (hovered_before, hovered_now) {
        (false, true) => inputs.push((id, WidgetInput::PointerEntered)),
        (true, false) => inputs.push((id, WidgetInput::PointerExited)),
        _ => {}
    }
}

fn report_focus(id: WidgetId, focused_now: bool, focused_before: bool, inputs: &mut FrameInputs) {
    if focused_now != focused_before {
        inputs.push((id, WidgetInput::FocusChanged(focused_now)));
    }
}
