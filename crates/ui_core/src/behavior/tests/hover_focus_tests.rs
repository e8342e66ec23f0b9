use super::*;

#[derive(Debug)]
struct FakeControl {
    background: Rgba,
    border: Rgba,
    cursor: CursorKind,
}

impl DecorationSurface for FakeControl {
    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn set_border(&mut self, color: Rgba) {
        self.border = color;
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.cursor = cursor;
    }
}

const COLORS: DecorationColors = DecorationColors {
    rest_background: Rgba::rgb(30, 144, 255),
    hover_background: Rgba::rgb(70, 130, 180),
    rest_border: Rgba::rgb(21, 100, 178),
    focus_border: Rgba::WHITE,
};

fn installed() -> (HoverFocusBehavior, FakeControl) {
    let mut behavior = HoverFocusBehavior::new(COLORS);
    let mut control = FakeControl {
        background: Rgba::BLACK,
        border: Rgba::BLACK,
        cursor: CursorKind::PointingHand,
    };
    behavior.install(&mut control);
    (behavior, control)
}

#[test]
fn install_paints_rest_decoration() {
    let (behavior, control) = installed();
    assert_eq!(control.background, COLORS.rest_background);
    assert_eq!(control.border, COLORS.rest_border);
    assert_eq!(control.cursor, CursorKind::Default);
    assert_eq!(behavior.state(), DecorationState::Rest);
}

#[test]
fn hover_swaps_background_and_cursor() {
    let (mut behavior, mut control) = installed();
    behavior.pointer_entered(&mut control);
    assert_eq!(control.background, COLORS.hover_background);
    assert_eq!(control.cursor, CursorKind::PointingHand);
    assert_eq!(behavior.state(), DecorationState::Hovered);

    behavior.pointer_exited(&mut control);
    assert_eq!(control.background, COLORS.rest_background);
    assert_eq!(control.cursor, CursorKind::Default);
    assert_eq!(behavior.state(), DecorationState::Rest);
}

#[test]
fn focus_border_wins_over_concurrent_hover() {
    let (mut behavior, mut control) = installed();
    behavior.pointer_entered(&mut control);
    behavior.focus_changed(true, &mut control);
    assert_eq!(control.border, COLORS.focus_border);
    assert_eq!(control.background, COLORS.hover_background);
    assert_eq!(behavior.state(), DecorationState::Focused);
    assert_eq!(behavior.decoration_color(), COLORS.focus_border);
}

#[test]
fn releasing_focus_while_hovered_keeps_hover_background() {
    let (mut behavior, mut control) = installed();
    behavior.focus_changed(true, &mut control);
    behavior.pointer_entered(&mut control);
    behavior.focus_changed(false, &mut control);
    assert_eq!(control.background, COLORS.hover_background);
    assert_eq!(control.border, COLORS.rest_border);
    assert_eq!(behavior.state(), DecorationState::Hovered);
    assert_eq!(
        behavior.hover_state(),
        HoverState {
            is_hovered: true,
            is_focused: false
        }
    );
}

#[test]
fn focus_only_ignores_pointer_paint() {
    let mut behavior = HoverFocusBehavior::focus_only(Rgba::DARK_GRAY, Rgba::BLACK, Rgba::CYAN);
    let mut control = FakeControl {
        background: Rgba::WHITE,
        border: Rgba::WHITE,
        cursor: CursorKind::Default,
    };
    behavior.install(&mut control);
    behavior.pointer_entered(&mut control);
    assert_eq!(control.background, Rgba::DARK_GRAY);
    assert_eq!(control.cursor, CursorKind::Default);
    assert!(behavior.hover_state().is_hovered);
    behavior.focus_changed(true, &mut control);
    assert_eq!(control.border, Rgba::CYAN);
}
