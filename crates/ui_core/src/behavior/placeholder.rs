use shared::style::Rgba;

use super::TextSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderPhase {
    ShowingPlaceholder,
    ShowingContent,
}

/// Foreground applied when focus leaves a field that holds user content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurStyle {
    #[default]
    KeepContentColor,
    Dim(Rgba),
}

/// Shows hint text in an empty input and swaps it out on focus.
///
/// Invariant: the phase is `ShowingPlaceholder` iff the surface text equals
/// the placeholder and the field is not focused.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderBehavior {
    placeholder: String,
    placeholder_color: Rgba,
    content_color: Rgba,
    blur_style: BlurStyle,
    phase: PlaceholderPhase,
    focused: bool,
}

impl PlaceholderBehavior {
    pub fn new(placeholder: impl Into<String>, placeholder_color: Rgba, content_color: Rgba) -> Self {
        Self {
            placeholder: placeholder.into(),
            placeholder_color,
            content_color,
            blur_style: BlurStyle::default(),
            phase: PlaceholderPhase::ShowingPlaceholder,
            focused: false,
        }
    }

    pub fn with_blur_style(mut self, blur_style: BlurStyle) -> Self {
        self.blur_style = blur_style;
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn placeholder_color(&self) -> Rgba {
        self.placeholder_color
    }

    pub fn content_color(&self) -> Rgba {
        self.content_color
    }

    pub fn phase(&self) -> PlaceholderPhase {
        self.phase
    }

    pub fn is_showing_placeholder(&self) -> bool {
        self.phase == PlaceholderPhase::ShowingPlaceholder
    }

    /// Puts the surface into the initial `ShowingPlaceholder` state.
    pub fn install(&mut self, surface: &mut impl TextSurface) {
        self.show_placeholder(surface);
        self.focused = false;
    }

    pub fn on_focus_change(&mut self, focused: bool, surface: &mut impl TextSurface) {
        if focused {
            self.focus_gained(surface);
        } else {
            self.focus_lost(surface);
        }
    }

    pub fn focus_gained(&mut self, surface: &mut impl TextSurface) {
        self.focused = true;
        match self.phase {
            PlaceholderPhase::ShowingPlaceholder => {
                surface.set_text(String::new());
                surface.set_foreground(self.content_color);
                self.phase = PlaceholderPhase::ShowingContent;
                tracing::debug!(placeholder = %self.placeholder, "placeholder cleared on focus");
            }
            PlaceholderPhase::ShowingContent => {
                // A dimmed field gets its content color back while edited.
                surface.set_foreground(self.content_color);
            }
        }
    }

    pub fn focus_lost(&mut self, surface: &mut impl TextSurface) {
        self.focused = false;
        if self.phase == PlaceholderPhase::ShowingPlaceholder {
            return;
        }

        // Text equal to the hint is indistinguishable from it once unfocused.
        let text = surface.text();
        if text.is_empty() || text == self.placeholder {
            self.show_placeholder(surface);
            tracing::debug!(placeholder = %self.placeholder, "placeholder restored on blur");
            return;
        }

        if let BlurStyle::Dim(color) = self.blur_style {
            surface.set_foreground(color);
        }
    }

    /// Writes user content. An edit over the hint switches to `ShowingContent`;
    /// an unfocused field left empty (or holding the hint) shows the hint again.
    pub fn content_edited(&mut self, text: String, surface: &mut impl TextSurface) {
        surface.set_text(text);
        let text = surface.text();
        if !self.focused && (text.is_empty() || text == self.placeholder) {
            self.show_placeholder(surface);
            return;
        }
        if self.phase == PlaceholderPhase::ShowingPlaceholder {
            surface.set_foreground(self.content_color);
            self.phase = PlaceholderPhase::ShowingContent;
            tracing::debug!(placeholder = %self.placeholder, "placeholder replaced by edit");
        }
    }

    fn show_placeholder(&mut self, surface: &mut impl TextSurface) {
        surface.set_text(self.placeholder.clone());
        surface.set_foreground(self.placeholder_color);
        self.phase = PlaceholderPhase::ShowingPlaceholder;
    }
}

#[cfg(test)]
#[path = "tests/placeholder_tests.rs"]
mod tests;
