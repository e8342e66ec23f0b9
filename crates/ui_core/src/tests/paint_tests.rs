use super::*;

#[test]
fn glow_stroke_width_and_opacity_follow_ring_index() {
    let strokes = glow_strokes();
    assert_eq!(strokes.len(), 6);
    for (idx, stroke) in strokes.iter().enumerate() {
        let i = idx as u32 + 1;
        assert_eq!(stroke.radius, i);
        assert_eq!(stroke.width, 2.0 * i as f32);
        assert!((stroke.opacity - 0.1 * (6 - i) as f32).abs() < 1e-6);
    }
}

#[test]
fn glow_opacity_strictly_decreases_outward() {
    let strokes = glow_strokes();
    assert!(strokes.windows(2).all(|w| w[0].opacity > w[1].opacity));
    assert!((strokes[0].opacity - 0.5).abs() < 1e-6);
    assert_eq!(strokes[5].opacity, 0.0);
}

#[test]
fn glow_outline_insets_each_ring() {
    let bounds = RectF::from_size(200.0, 60.0);
    let first = GlowStroke::at(1).outline(bounds);
    assert_eq!(first, RectF::new(0.0, 0.0, 199.0, 59.0));
    let last = GlowStroke::at(6).outline(bounds);
    assert_eq!(last, RectF::new(5.0, 5.0, 189.0, 49.0));
}

#[test]
fn glow_outline_never_goes_negative() {
    let tiny = RectF::from_size(3.0, 2.0);
    let outline = GlowStroke::at(6).outline(tiny);
    assert_eq!(outline.width, 0.0);
    assert_eq!(outline.height, 0.0);
}

#[test]
fn glow_decoration_emits_strokes_in_drawing_order() {
    let glow = GlowDecoration::new(Rgba::CYAN, GLOW_CORNER_RADIUS).expect("glow");
    let prims = glow.primitives(RectF::from_size(120.0, 40.0));
    assert_eq!(prims.len(), 6);
    let alphas: Vec<u8> = prims
        .iter()
        .map(|p| match p {
            PaintPrimitive::StrokeRoundedRect { color, .. } => color.a,
            other => panic!("unexpected primitive {other:?}"),
        })
        .collect();
    assert_eq!(alphas, vec![128, 102, 77, 51, 26, 0]);
    assert_eq!(glow.phase(), PaintPhase::BeforeContent);
}

#[test]
fn rejects_negative_or_nan_radius() {
    assert!(matches!(
        RoundedBackground::new(Rgba::WHITE, -1.0),
        Err(StyleError::InvalidRadius { .. })
    ));
    assert!(matches!(
        GlowDecoration::new(Rgba::WHITE, f32::NAN),
        Err(StyleError::InvalidRadius { .. })
    ));
}

#[test]
fn zero_radius_background_is_a_plain_rectangle() {
    let bg = RoundedBackground::new(Rgba::LIGHT_GRAY, 0.0).expect("background");
    let prims = bg.primitives(RectF::from_size(10.0, 10.0));
    assert_eq!(
        prims,
        vec![PaintPrimitive::FillRoundedRect {
            rect: RectF::from_size(10.0, 10.0),
            radius: 0.0,
            color: Rgba::LIGHT_GRAY,
        }]
    );
}

#[test]
fn gradient_blends_between_endpoints() {
    let gradient = VerticalGradient::new(Rgba::rgb(0, 0, 170), Rgba::rgb(0, 0, 220));
    assert_eq!(gradient.color_at(0.0), Rgba::rgb(0, 0, 170));
    assert_eq!(gradient.color_at(0.5), Rgba::rgb(0, 0, 195));
    assert_eq!(gradient.color_at(2.0), Rgba::rgb(0, 0, 220));
}

#[test]
fn primitives_serialize_with_kind_tag() {
    let bg = RoundedBackground::new(Rgba::rgb(30, 144, 255), 15.0).expect("background");
    let json = serde_json::to_value(bg.primitives(RectF::from_size(4.0, 2.0))).expect("json");
    assert_eq!(json[0]["kind"], "fill_rounded_rect");
    assert_eq!(json[0]["color"], "#1e90ff");
    assert_eq!(json[0]["radius"], 15.0);
}
