//! Widget input collected while rendering a frame, applied to the screen
//! model once the frame has been drawn.

use shared::{domain::WidgetId, error::StyleError};
use ui_core::{IntentSink, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetInput {
    FocusChanged(bool),
    PointerEntered,
    PointerExited,
    Activated,
    TextEdited(String),
}

impl WidgetInput {
    fn name(&self) -> &'static str {
        match self {
            WidgetInput::FocusChanged(_) => "focus_changed",
            WidgetInput::PointerEntered => "pointer_entered",
            WidgetInput::PointerExited => "pointer_exited",
            WidgetInput::Activated => "activated",
            WidgetInput::TextEdited(_) => "text_edited",
        }
    }
}

/// Applies inputs in the order they were observed.
///
/// Activating a control without a navigation action is a no-op.
pub fn apply_inputs(
    screen: &mut Screen,
    inputs: Vec<(WidgetId, WidgetInput)>,
    sink: &mut dyn IntentSink,
) -> Result<(), StyleError> {
    for (id, input) in inputs {
        tracing::trace!(widget = id.0, input = input.name(), "applying widget input");
        match input {
            WidgetInput::FocusChanged(focused) => screen.focus_changed(id, focused)?,
            WidgetInput::PointerEntered => screen.pointer_entered(id)?,
            WidgetInput::PointerExited => screen.pointer_exited(id)?,
            WidgetInput::Activated => {
                if screen.action_for(id).is_some() {
                    screen.activate(id, sink)?;
                }
            }
            WidgetInput::TextEdited(text) => screen.edit_text(id, text)?,
        }
    }
    Ok(())
}
