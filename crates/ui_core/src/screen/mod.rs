//! Screen composition: widget models, their grid placement and the action
//! wiring that turns a button activation into a [`NavigationIntent`].

use std::collections::{BTreeMap, HashMap};

use shared::{
    domain::{NavigationIntent, WidgetId},
    error::StyleError,
    style::Rgba,
};

use crate::{
    behavior::WidgetEvents,
    factory::{ButtonHandle, LabelHandle, PanelHandle, TextAreaHandle, TextFieldHandle},
    layout::{GridCell, LayoutEntry, ScreenLayout},
    navigation::IntentSink,
    paint::VerticalGradient,
};

pub mod gallery;
pub mod login;

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    TextField(TextFieldHandle),
    TextArea(TextAreaHandle),
    Label(LabelHandle),
    Button(ButtonHandle),
    Panel(PanelHandle),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::TextField(_) => "text_field",
            Widget::TextArea(_) => "text_area",
            Widget::Label(_) => "label",
            Widget::Button(_) => "button",
            Widget::Panel(_) => "panel",
        }
    }

    /// Input events only reach widgets that carry behaviors.
    pub fn events_mut(&mut self) -> Option<&mut dyn WidgetEvents> {
        match self {
            Widget::TextField(field) => Some(field),
            Widget::Button(button) => Some(button),
            Widget::TextArea(_) | Widget::Label(_) | Widget::Panel(_) => None,
        }
    }
}

macro_rules! widget_from {
    ($variant:ident, $handle:ty) => {
        impl From<$handle> for Widget {
            fn from(value: $handle) -> Self {
                Widget::$variant(value)
            }
        }
    };
}

widget_from!(TextField, TextFieldHandle);
widget_from!(TextArea, TextAreaHandle);
widget_from!(Label, LabelHandle);
widget_from!(Button, ButtonHandle);
widget_from!(Panel, PanelHandle);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenBackground {
    Solid(Rgba),
    Gradient(VerticalGradient),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    title: String,
    background: ScreenBackground,
    widgets: BTreeMap<WidgetId, Widget>,
    layout: ScreenLayout,
    actions: HashMap<WidgetId, NavigationIntent>,
}

impl Screen {
    pub fn builder(title: impl Into<String>) -> ScreenBuilder {
        ScreenBuilder {
            title: title.into(),
            background: ScreenBackground::Solid(Rgba::DARK_GRAY),
            widgets: Vec::new(),
            actions: HashMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> ScreenBackground {
        self.background
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }

    pub fn widgets(&self) -> impl Iterator<Item = (&WidgetId, &Widget)> {
        self.widgets.iter()
    }

    pub fn action_for(&self, id: WidgetId) -> Option<NavigationIntent> {
        self.actions.get(&id).copied()
    }

    /// Emits exactly one intent for an action control; no widget state changes.
    pub fn activate(&self, id: WidgetId, sink: &mut dyn IntentSink) -> Result<NavigationIntent, StyleError> {
        let intent = self
            .action_for(id)
            .ok_or(StyleError::UnknownWidget { id: id.0 })?;
        tracing::debug!(widget = id.0, page = %intent, "action control activated");
        sink.emit(intent);
        Ok(intent)
    }

    pub fn focus_changed(&mut self, id: WidgetId, focused: bool) -> Result<(), StyleError> {
        if let Some(events) = self.events_for(id)? {
            events.on_focus_change(focused);
        }
        Ok(())
    }

    pub fn pointer_entered(&mut self, id: WidgetId) -> Result<(), StyleError> {
        if let Some(events) = self.events_for(id)? {
            events.on_pointer_enter();
        }
        Ok(())
    }

    pub fn pointer_exited(&mut self, id: WidgetId) -> Result<(), StyleError> {
        if let Some(events) = self.events_for(id)? {
            events.on_pointer_exit();
        }
        Ok(())
    }

    /// Replaces the content of an editable widget with what the user typed.
    pub fn edit_text(&mut self, id: WidgetId, text: String) -> Result<(), StyleError> {
        match self.widgets.get_mut(&id) {
            Some(Widget::TextField(field)) => field.set_text(text),
            Some(Widget::TextArea(area)) => *area.text_mut() = text,
            Some(other) => tracing::debug!(widget = id.0, kind = other.kind(), "ignoring text edit"),
            None => return Err(StyleError::UnknownWidget { id: id.0 }),
        }
        Ok(())
    }

    fn events_for(&mut self, id: WidgetId) -> Result<Option<&mut dyn WidgetEvents>, StyleError> {
        self.widgets
            .get_mut(&id)
            .map(Widget::events_mut)
            .ok_or(StyleError::UnknownWidget { id: id.0 })
    }
}

pub struct ScreenBuilder {
    title: String,
    background: ScreenBackground,
    widgets: Vec<(WidgetId, Widget, GridCell)>,
    actions: HashMap<WidgetId, NavigationIntent>,
}

impl ScreenBuilder {
    pub fn background(mut self, background: ScreenBackground) -> Self {
        self.background = background;
        self
    }

    pub fn place(mut self, id: WidgetId, widget: impl Into<Widget>, cell: GridCell) -> Self {
        self.widgets.push((id, widget.into(), cell));
        self
    }

    pub fn on_activate(mut self, id: WidgetId, intent: NavigationIntent) -> Self {
        self.actions.insert(id, intent);
        self
    }

    pub fn build(self) -> Result<Screen, StyleError> {
        let entries = self
            .widgets
            .iter()
            .map(|(id, _, cell)| LayoutEntry {
                widget: *id,
                cell: *cell,
            })
            .collect();
        let layout = ScreenLayout::new(entries)?;

        let widgets: BTreeMap<WidgetId, Widget> = self
            .widgets
            .into_iter()
            .map(|(id, widget, _)| (id, widget))
            .collect();
        if let Some(id) = self.actions.keys().find(|id| !widgets.contains_key(id)) {
            return Err(StyleError::UnknownWidget { id: id.0 });
        }

        Ok(Screen {
            title: self.title,
            background: self.background,
            widgets,
            layout,
            actions: self.actions,
        })
    }
}
