//! The bank's login screen.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{HorizontalAlign, NavigationIntent, WidgetId},
    error::StyleError,
    style::{FontSpec, Rgba, WidgetStyle},
};

use crate::{
    factory::{create_button, create_label},
    layout::{Anchor, GridCell, Insets},
    paint::VerticalGradient,
    screen::{Screen, ScreenBackground},
};

pub const SCREEN_TITLE: &str = "Login";

pub const TITLE: WidgetId = WidgetId(1);
pub const LOGIN: WidgetId = WidgetId(2);
pub const ADMIN_LOGIN: WidgetId = WidgetId(3);
pub const REGISTER_PROMPT: WidgetId = WidgetId(4);
pub const REGISTER: WidgetId = WidgetId(5);
pub const EXIT: WidgetId = WidgetId(6);
pub const PREVIOUS: WidgetId = WidgetId(7);
pub const NEXT: WidgetId = WidgetId(8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginTheme {
    pub title: WidgetStyle,
    pub prompt: WidgetStyle,
    pub button: WidgetStyle,
    pub button_hover: Rgba,
    pub background: VerticalGradient,
    pub title_insets: Insets,
    pub row_insets: Insets,
}

impl Default for LoginTheme {
    fn default() -> Self {
        Self {
            title: WidgetStyle::new()
                .with_font(FontSpec::new("Arial", 32.0).bold())
                .with_text_color(Rgba::WHITE),
            prompt: WidgetStyle::new()
                .with_font(FontSpec::new("Arial", 20.0))
                .with_text_color(Rgba::WHITE),
            button: WidgetStyle::new()
                .with_font(FontSpec::new("Sans-Serif", 20.0))
                .with_text_color(Rgba::WHITE)
                .with_background(Rgba::rgb(30, 144, 255))
                .with_border(Rgba::WHITE),
            button_hover: Rgba::rgb(70, 130, 180),
            background: VerticalGradient::new(Rgba::rgb(0, 0, 170), Rgba::rgb(0, 0, 220)),
            title_insets: Insets::new(20.0, 0.0, 50.0, 0.0),
            row_insets: Insets::new(10.0, 0.0, 10.0, 0.0),
        }
    }
}

impl LoginTheme {
    /// Fills unset style fields from the built-in theme.
    pub fn merged_with_defaults(self) -> Self {
        let defaults = Self::default();
        Self {
            title: self.title.or(&defaults.title),
            prompt: self.prompt.or(&defaults.prompt),
            button: self.button.or(&defaults.button),
            ..self
        }
    }
}

/// Grid cell of every widget on the login screen: title across the top,
/// login/admin on one row, the register prompt, register, exit, then the
/// previous/next pair on the last row.
pub fn login_cells(theme: &LoginTheme) -> [(WidgetId, GridCell); 8] {
    let row = |r: u32, c: u32| GridCell::at(r, c).inset(theme.row_insets);
    [
        (
            TITLE,
            GridCell::at(0, 0)
                .spanning(2)
                .anchored(Anchor::North)
                .inset(theme.title_insets),
        ),
        (LOGIN, row(1, 0).anchored(Anchor::Start)),
        (ADMIN_LOGIN, row(1, 1).anchored(Anchor::End)),
        (REGISTER_PROMPT, row(2, 0).spanning(2)),
        (REGISTER, row(3, 0).spanning(2)),
        (EXIT, row(4, 0).spanning(2)),
        (PREVIOUS, row(5, 0).anchored(Anchor::Start)),
        (NEXT, row(5, 1).anchored(Anchor::End)),
    ]
}

pub fn compose_login_screen(theme: &LoginTheme) -> Result<Screen, StyleError> {
    let button = |text: &str| create_button(text, &theme.button, theme.button_hover, None);

    let title = create_label(
        "Welcome to the bank - Login page!",
        &theme.title,
        HorizontalAlign::Center,
    )?;
    let login = button("Login")?;
    let admin_login = button("Admin Login")?;
    let prompt = create_label(
        "Would you like to register?",
        &theme.prompt,
        HorizontalAlign::Center,
    )?;
    let register = button("Register")?;
    let exit = button("Exit the application")?;
    let previous = button("Previous Page")?;
    let next = button("Next Page (Terms of Use)")?;

    let [title_cell, login_cell, admin_cell, prompt_cell, register_cell, exit_cell, prev_cell, next_cell] =
        login_cells(theme).map(|(_, cell)| cell);

    Screen::builder(SCREEN_TITLE)
        .background(ScreenBackground::Gradient(theme.background))
        .place(TITLE, title, title_cell)
        .place(LOGIN, login, login_cell)
        .place(ADMIN_LOGIN, admin_login, admin_cell)
        .place(REGISTER_PROMPT, prompt, prompt_cell)
        .place(REGISTER, register, register_cell)
        .place(EXIT, exit, exit_cell)
        .place(PREVIOUS, previous, prev_cell)
        .place(NEXT, next, next_cell)
        .on_activate(LOGIN, NavigationIntent::LoginPage)
        .on_activate(ADMIN_LOGIN, NavigationIntent::AdminLoginPage)
        .on_activate(REGISTER, NavigationIntent::RegisterPage)
        .on_activate(EXIT, NavigationIntent::Exit)
        .on_activate(PREVIOUS, NavigationIntent::PrevPage)
        .on_activate(NEXT, NavigationIntent::NextPage)
        .build()
}

#[cfg(test)]
#[path = "tests/login_tests.rs"]
mod tests;
