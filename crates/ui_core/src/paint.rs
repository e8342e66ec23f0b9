//! Paint decorations composed around a widget's default content drawing.
//!
//! A decoration turns the widget bounds into backend-neutral primitives; the
//! renderer draws them before or after the widget's own content.

use serde::{Deserialize, Serialize};
use shared::{error::StyleError, style::Rgba};

/// Number of strokes in a label glow.
pub const GLOW_LAYERS: u32 = 6;
pub const GLOW_CORNER_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintPhase {
    BeforeContent,
    AfterContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaintPrimitive {
    FillRoundedRect {
        rect: RectF,
        radius: f32,
        color: Rgba,
    },
    StrokeRoundedRect {
        rect: RectF,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    VerticalGradient {
        rect: RectF,
        top: Rgba,
        bottom: Rgba,
    },
}

pub trait PaintDecoration {
    fn phase(&self) -> PaintPhase {
        PaintPhase::BeforeContent
    }

    fn primitives(&self, bounds: RectF) -> Vec<PaintPrimitive>;
}

pub fn validate_radius(what: &'static str, value: f32) -> Result<f32, StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StyleError::InvalidRadius { what, value })
    }
}

/// One ring of a label glow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowStroke {
    pub radius: u32,
    pub width: f32,
    pub opacity: f32,
}

impl GlowStroke {
    pub fn at(radius: u32) -> Self {
        Self {
            radius,
            width: 2.0 * radius as f32,
            opacity: 0.1 * GLOW_LAYERS.saturating_sub(radius) as f32,
        }
    }

    /// Ring outline inset by `radius - 1` and shrunk by `2 * radius - 1`.
    pub fn outline(&self, bounds: RectF) -> RectF {
        let inset = self.radius.saturating_sub(1) as f32;
        let shrink = (2 * self.radius) as f32 - 1.0;
        RectF::new(
            bounds.x + inset,
            bounds.y + inset,
            (bounds.width - shrink).max(0.0),
            (bounds.height - shrink).max(0.0),
        )
    }
}

/// Glow rings from innermost (most opaque) to outermost (transparent).
pub fn glow_strokes() -> Vec<GlowStroke> {
    (1..=GLOW_LAYERS).map(GlowStroke::at).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowDecoration {
    color: Rgba,
    corner_radius: f32,
}

impl GlowDecoration {
    pub fn new(color: Rgba, corner_radius: f32) -> Result<Self, StyleError> {
        Ok(Self {
            color,
            corner_radius: validate_radius("glow corner radius", corner_radius)?,
        })
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }
}

impl PaintDecoration for GlowDecoration {
    fn primitives(&self, bounds: RectF) -> Vec<PaintPrimitive> {
        glow_strokes()
            .into_iter()
            .map(|stroke| PaintPrimitive::StrokeRoundedRect {
                rect: stroke.outline(bounds),
                radius: self.corner_radius,
                width: stroke.width,
                color: self.color.with_opacity(stroke.opacity),
            })
            .collect()
    }
}

/// Filled rounded rectangle behind a widget; radius 0 is a plain rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedBackground {
    fill: Rgba,
    radius: f32,
}

impl RoundedBackground {
    pub fn new(fill: Rgba, radius: f32) -> Result<Self, StyleError> {
        Ok(Self {
            fill,
            radius: validate_radius("corner radius", radius)?,
        })
    }

    pub fn fill(&self) -> Rgba {
        self.fill
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl PaintDecoration for RoundedBackground {
    fn primitives(&self, bounds: RectF) -> Vec<PaintPrimitive> {
        vec![PaintPrimitive::FillRoundedRect {
            rect: bounds,
            radius: self.radius,
            color: self.fill,
        }]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalGradient {
    pub top: Rgba,
    pub bottom: Rgba,
}

impl VerticalGradient {
    pub fn new(top: Rgba, bottom: Rgba) -> Self {
        Self { top, bottom }
    }

    /// Linear blend at `t` in 0..=1 from top to bottom.
    pub fn color_at(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgba::rgba(
            mix(self.top.r, self.bottom.r),
            mix(self.top.g, self.bottom.g),
            mix(self.top.b, self.bottom.b),
            mix(self.top.a, self.bottom.a),
        )
    }
}

impl PaintDecoration for VerticalGradient {
    fn primitives(&self, bounds: RectF) -> Vec<PaintPrimitive> {
        vec![PaintPrimitive::VerticalGradient {
            rect: bounds,
            top: self.top,
            bottom: self.bottom,
        }]
    }
}

#[cfg(test)]
#[path = "tests/paint_tests.rs"]
mod tests;
