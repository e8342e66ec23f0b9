//! Appearance values handed to the widget factory.
//!
//! `WidgetStyle` is deliberately loose (every field optional) so it can be
//! deserialized from a partial theme file; the factory resolves it and
//! refuses to build a widget whose required fields are unset.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Channel multiplier used when deriving a darker shade (rest borders).
pub const DARKEN_FACTOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(192, 192, 192);
    pub const DARK_GRAY: Rgba = Rgba::rgb(64, 64, 64);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Each RGB channel scaled by [`DARKEN_FACTOR`] and truncated; alpha kept.
    pub fn darker(self) -> Self {
        let scale = |c: u8| (f64::from(c) * DARKEN_FACTOR) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Same color with alpha multiplied by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            a: (f32::from(self.a) * opacity).round() as u8,
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = StyleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || StyleError::MalformedColor {
            value: raw.to_string(),
        };
        let hex = raw.trim().strip_prefix('#').ok_or_else(malformed)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(malformed());
        }
        let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|_| malformed());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl TryFrom<String> for Rgba {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_monospace(&self) -> bool {
        let family = self.family.to_ascii_lowercase();
        family.contains("mono") || family.contains("courier")
    }
}

/// Partial appearance description; see the module docs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyle {
    pub font: Option<FontSpec>,
    pub text_color: Option<Rgba>,
    pub placeholder_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
    pub border_width: Option<f32>,
    pub caret_color: Option<Rgba>,
    pub corner_radius: Option<f32>,
    pub tooltip: Option<String>,
}

impl WidgetStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_placeholder_color(mut self, color: Rgba) -> Self {
        self.placeholder_color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border(mut self, color: Rgba) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_caret(mut self, color: Rgba) -> Self {
        self.caret_color = Some(color);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Fills every unset field from `fallback`; set fields win.
    pub fn or(mut self, fallback: &WidgetStyle) -> Self {
        self.font = self.font.or_else(|| fallback.font.clone());
        self.text_color = self.text_color.or(fallback.text_color);
        self.placeholder_color = self.placeholder_color.or(fallback.placeholder_color);
        self.background_color = self.background_color.or(fallback.background_color);
        self.border_color = self.border_color.or(fallback.border_color);
        self.border_width = self.border_width.or(fallback.border_width);
        self.caret_color = self.caret_color.or(fallback.caret_color);
        self.corner_radius = self.corner_radius.or(fallback.corner_radius);
        self.tooltip = self.tooltip.or_else(|| fallback.tooltip.clone());
        self
    }

    pub fn require_font(&self, widget: &str) -> Result<FontSpec, StyleError> {
        let font = self
            .font
            .clone()
            .ok_or_else(|| StyleError::missing_font(widget))?;
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(StyleError::InvalidFontSize {
                widget: widget.to_string(),
                size: font.size,
            });
        }
        Ok(font)
    }

    pub fn require_text_color(&self, widget: &str) -> Result<Rgba, StyleError> {
        self.text_color
            .ok_or_else(|| StyleError::missing_color(widget, "text_color"))
    }

    pub fn require_background(&self, widget: &str) -> Result<Rgba, StyleError> {
        self.background_color
            .ok_or_else(|| StyleError::missing_color(widget, "background_color"))
    }

    pub fn require_border(&self, widget: &str) -> Result<Rgba, StyleError> {
        self.border_color
            .ok_or_else(|| StyleError::missing_color(widget, "border_color"))
    }

    pub fn require_caret(&self, widget: &str) -> Result<Rgba, StyleError> {
        self.caret_color
            .ok_or_else(|| StyleError::missing_color(widget, "caret_color"))
    }
}
