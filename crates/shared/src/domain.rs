use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);
    };
}

id_newtype!(WidgetId);

/// Symbolic page request emitted when an action control is activated.
///
/// Carries no payload; interpreting it is left to the navigation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationIntent {
    LoginPage,
    AdminLoginPage,
    RegisterPage,
    PrevPage,
    NextPage,
    Exit,
}

impl NavigationIntent {
    pub const ALL: [NavigationIntent; 6] = [
        NavigationIntent::LoginPage,
        NavigationIntent::AdminLoginPage,
        NavigationIntent::RegisterPage,
        NavigationIntent::PrevPage,
        NavigationIntent::NextPage,
        NavigationIntent::Exit,
    ];

    pub fn page_name(self) -> &'static str {
        match self {
            NavigationIntent::LoginPage => "LoginPage",
            NavigationIntent::AdminLoginPage => "AdminLoginPage",
            NavigationIntent::RegisterPage => "RegisterPage",
            NavigationIntent::PrevPage => "PrevPage",
            NavigationIntent::NextPage => "NextPage",
            NavigationIntent::Exit => "Exit",
        }
    }

    pub fn is_exit(self) -> bool {
        self == NavigationIntent::Exit
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.page_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    #[default]
    Default,
    PointingHand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}
