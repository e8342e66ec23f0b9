//! Toolkit-independent styling layer for the bank desktop client.
//!
//! Widgets are plain models built by [`factory`]; their reactive appearance
//! lives in the [`behavior`] state machines; [`screen`] arranges them with a
//! declarative [`layout::ScreenLayout`]. A rendering backend draws the
//! models and feeds input events back through [`behavior::WidgetEvents`].

pub mod behavior;
pub mod factory;
pub mod layout;
pub mod navigation;
pub mod paint;
pub mod screen;

pub use behavior::{
    hover_focus::{DecorationColors, DecorationState, HoverFocusBehavior, HoverState},
    placeholder::{BlurStyle, PlaceholderBehavior, PlaceholderPhase},
    DecorationSurface, TextSurface, WidgetEvents,
};
pub use factory::{
    create_button, create_focus_text_field, create_glowing_label, create_label, create_panel,
    create_text_area, create_text_field, ButtonHandle, LabelHandle, PanelHandle, TextAreaHandle,
    TextFieldHandle,
};
pub use layout::{Anchor, GridCell, Insets, ScreenLayout};
pub use navigation::IntentSink;
pub use screen::{Screen, ScreenBackground, Widget};
