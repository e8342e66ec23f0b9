use thiserror::Error;

/// Construction-time failures of the styling layer.
///
/// All variants are raised synchronously by the call that builds the widget,
/// behavior or layout; nothing is partially constructed on error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("{widget}: font is not set")]
    MissingFont { widget: String },
    #[error("{widget}: color `{field}` is not set")]
    MissingColor { widget: String, field: &'static str },
    #[error("{widget}: font size must be positive (got {size})")]
    InvalidFontSize { widget: String, size: f32 },
    #[error("malformed color `{value}`; expected #RRGGBB or #RRGGBBAA")]
    MalformedColor { value: String },
    #[error("{what} must be a finite, non-negative radius (got {value})")]
    InvalidRadius { what: &'static str, value: f32 },
    #[error("padding must be non-negative (got {value})")]
    InvalidPadding { value: i32 },
    #[error("{behavior} behavior is already attached to this widget")]
    BehaviorAlreadyAttached { behavior: &'static str },
    #[error("layout cells for widgets {first} and {second} overlap")]
    LayoutOverlap { first: u32, second: u32 },
    #[error("no widget with id {id} on this screen")]
    UnknownWidget { id: u32 },
}

impl StyleError {
    pub fn missing_font(widget: impl Into<String>) -> Self {
        Self::MissingFont {
            widget: widget.into(),
        }
    }

    pub fn missing_color(widget: impl Into<String>, field: &'static str) -> Self {
        Self::MissingColor {
            widget: widget.into(),
            field,
        }
    }

    /// True for the errors a caller fixes by supplying style configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            StyleError::MissingFont { .. }
                | StyleError::MissingColor { .. }
                | StyleError::InvalidFontSize { .. }
                | StyleError::MalformedColor { .. }
        )
    }
}
