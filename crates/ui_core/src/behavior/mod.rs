//! Reusable stateful decorations attached to widgets.
//!
//! A behavior never owns the widget; it mutates the narrow surface traits
//! below, so the state machines run without a live UI runtime.

use shared::{domain::CursorKind, style::Rgba};

pub mod hover_focus;
pub mod placeholder;

pub trait TextSurface {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
    fn set_foreground(&mut self, color: Rgba);
}

pub trait DecorationSurface {
    fn set_background(&mut self, color: Rgba);
    fn set_border(&mut self, color: Rgba);
    fn set_cursor(&mut self, cursor: CursorKind);
}

/// Input capability a widget exposes to the runtime that drives it.
pub trait WidgetEvents {
    fn on_focus_change(&mut self, focused: bool);
    fn on_pointer_enter(&mut self) {}
    fn on_pointer_exit(&mut self) {}
}
