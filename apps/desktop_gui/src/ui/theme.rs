//! Conversions from toolkit-independent style values to egui types.

use eframe::egui;
use shared::{
    domain::{CursorKind, HorizontalAlign},
    style::{FontSpec, Rgba},
};
use ui_core::{
    layout::Insets,
    paint::{PaintPrimitive, RectF},
};

pub fn color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn font_id(font: &FontSpec) -> egui::FontId {
    let family = if font.is_monospace() {
        egui::FontFamily::Monospace
    } else {
        egui::FontFamily::Proportional
    };
    egui::FontId::new(font.size, family)
}

pub fn rich_text(text: &str, font: &FontSpec, color: Rgba) -> egui::RichText {
    let mut rich = egui::RichText::new(text)
        .font(font_id(font))
        .color(color32(color));
    if font.is_bold() {
        rich = rich.strong();
    }
    if font.italic {
        rich = rich.italics();
    }
    rich
}

pub fn corner(radius: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(radius.round().clamp(0.0, f32::from(u8::MAX)) as u8)
}

fn margin_side(value: f32) -> i8 {
    value.round().clamp(0.0, f32::from(i8::MAX)) as i8
}

pub fn margin(insets: Insets) -> egui::Margin {
    egui::Margin {
        left: margin_side(insets.left),
        right: margin_side(insets.right),
        top: margin_side(insets.top),
        bottom: margin_side(insets.bottom),
    }
}

pub fn uniform_margin(value: f32) -> egui::Margin {
    egui::Margin::same(margin_side(value))
}

pub fn cursor_icon(cursor: CursorKind) -> egui::CursorIcon {
    match cursor {
        CursorKind::Default => egui::CursorIcon::Default,
        CursorKind::PointingHand => egui::CursorIcon::PointingHand,
    }
}

pub fn align(align: HorizontalAlign) -> egui::Align {
    match align {
        HorizontalAlign::Left => egui::Align::Min,
        HorizontalAlign::Center => egui::Align::Center,
        HorizontalAlign::Right => egui::Align::Max,
    }
}

pub fn rect_f(rect: egui::Rect) -> RectF {
    RectF::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

pub fn to_rect(rect: RectF) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

pub fn shape(primitive: &PaintPrimitive) -> egui::Shape {
    match *primitive {
        PaintPrimitive::FillRoundedRect {
            rect,
            radius,
            color,
        } => egui::Shape::rect_filled(to_rect(rect), corner(radius), color32(color)),
        PaintPrimitive::StrokeRoundedRect {
            rect,
            radius,
            width,
            color,
        } => egui::Shape::rect_stroke(
            to_rect(rect),
            corner(radius),
            egui::Stroke::new(width, color32(color)),
            egui::StrokeKind::Middle,
        ),
        PaintPrimitive::VerticalGradient { rect, top, bottom } => {
            let rect = to_rect(rect);
            let (top, bottom) = (color32(top), color32(bottom));
            let mut mesh = egui::Mesh::default();
            mesh.colored_vertex(rect.left_top(), top);
            mesh.colored_vertex(rect.right_top(), top);
            mesh.colored_vertex(rect.left_bottom(), bottom);
            mesh.colored_vertex(rect.right_bottom(), bottom);
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(1, 3, 2);
            egui::Shape::mesh(mesh)
        }
    }
}

pub fn shapes(primitives: &[PaintPrimitive]) -> egui::Shape {
    egui::Shape::Vec(primitives.iter().map(shape).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_keep_channels() {
        let c = color32(Rgba::rgb(30, 144, 255));
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (30, 144, 255, 255));
    }

    #[test]
    fn radii_and_margins_saturate() {
        assert_eq!(corner(300.0), egui::CornerRadius::same(255));
        assert_eq!(corner(-4.0), egui::CornerRadius::same(0));
        let m = margin(Insets::new(20.0, 0.0, 500.0, 3.4));
        assert_eq!((m.top, m.left, m.bottom, m.right), (20, 0, 127, 3));
    }

    #[test]
    fn rect_conversion_is_lossless() {
        let r = RectF::new(5.0, 6.0, 100.0, 40.0);
        assert_eq!(rect_f(to_rect(r)), r);
    }

    #[test]
    fn gradient_becomes_two_triangles() {
        let shape = shape(&PaintPrimitive::VerticalGradient {
            rect: RectF::from_size(10.0, 10.0),
            top: Rgba::rgb(0, 0, 170),
            bottom: Rgba::rgb(0, 0, 220),
        });
        let egui::Shape::Mesh(mesh) = shape else {
            panic!("expected mesh");
        };
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
