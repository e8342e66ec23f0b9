use shared::{domain::CursorKind, style::Rgba};

use super::DecorationSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationColors {
    pub rest_background: Rgba,
    pub hover_background: Rgba,
    pub rest_border: Rgba,
    pub focus_border: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    pub is_hovered: bool,
    pub is_focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationState {
    Rest,
    Hovered,
    Focused,
}

/// Swaps background on pointer hover and border on keyboard focus.
///
/// Hover drives only the background and cursor, focus drives only the
/// border, so both can be active at once without interfering.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverFocusBehavior {
    colors: DecorationColors,
    pointer_feedback: bool,
    state: HoverState,
}

impl HoverFocusBehavior {
    pub fn new(colors: DecorationColors) -> Self {
        Self {
            colors,
            pointer_feedback: true,
            state: HoverState::default(),
        }
    }

    /// Border-on-focus only; pointer movement is tracked but not painted.
    pub fn focus_only(background: Rgba, rest_border: Rgba, focus_border: Rgba) -> Self {
        Self {
            colors: DecorationColors {
                rest_background: background,
                hover_background: background,
                rest_border,
                focus_border,
            },
            pointer_feedback: false,
            state: HoverState::default(),
        }
    }

    pub fn colors(&self) -> DecorationColors {
        self.colors
    }

    pub fn hover_state(&self) -> HoverState {
        self.state
    }

    /// Focus takes precedence over hover.
    pub fn state(&self) -> DecorationState {
        if self.state.is_focused {
            DecorationState::Focused
        } else if self.state.is_hovered {
            DecorationState::Hovered
        } else {
            DecorationState::Rest
        }
    }

    pub fn decoration_color(&self) -> Rgba {
        match self.state() {
            DecorationState::Focused => self.colors.focus_border,
            DecorationState::Hovered => self.colors.hover_background,
            DecorationState::Rest => self.colors.rest_background,
        }
    }

    pub fn install(&mut self, surface: &mut impl DecorationSurface) {
        self.state = HoverState::default();
        surface.set_background(self.colors.rest_background);
        surface.set_border(self.colors.rest_border);
        surface.set_cursor(CursorKind::Default);
    }

    pub fn pointer_entered(&mut self, surface: &mut impl DecorationSurface) {
        self.state.is_hovered = true;
        if self.pointer_feedback {
            surface.set_background(self.colors.hover_background);
            surface.set_cursor(CursorKind::PointingHand);
        }
    }

    pub fn pointer_exited(&mut self, surface: &mut impl DecorationSurface) {
        self.state.is_hovered = false;
        if self.pointer_feedback {
            surface.set_background(self.colors.rest_background);
            surface.set_cursor(CursorKind::Default);
        }
    }

    pub fn focus_changed(&mut self, focused: bool, surface: &mut impl DecorationSurface) {
        self.state.is_focused = focused;
        let border = if focused {
            self.colors.focus_border
        } else {
            self.colors.rest_border
        };
        surface.set_border(border);
        tracing::debug!(focused, border = %border, "decoration focus changed");
    }
}

#[cfg(test)]
#[path = "tests/hover_focus_tests.rs"]
mod tests;
