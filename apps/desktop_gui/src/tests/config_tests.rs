use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use shared::style::Rgba;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_the_login_window() {
    let settings = Settings::default();
    assert_eq!(settings.window_title, "Welcome to the bank! | Login Page");
    assert_eq!((settings.window_width, settings.window_height), (1080.0, 720.0));
    assert!(settings.always_on_top);
    assert_eq!(settings.start_screen, StartScreen::Login);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r##"
window_title = "Bank"
window_width = 800.0
start_screen = "gallery"

[theme]
button_hover = "#112233"

[theme.button]
background_color = "#ff0000"
"##,
    )
    .expect("parse");

    assert_eq!(settings.window_title, "Bank");
    assert_eq!(settings.window_width, 800.0);
    assert_eq!(settings.window_height, 720.0);
    assert_eq!(settings.start_screen, StartScreen::Gallery);
    assert_eq!(settings.theme.button_hover, Rgba::rgb(0x11, 0x22, 0x33));
    assert_eq!(settings.theme.button.background_color, Some(Rgba::RED));
    assert!(settings.theme.button.font.is_some(), "unset fields come from defaults");
}

#[test]
fn malformed_color_in_file_is_an_error() {
    let mut settings = Settings::default();
    let err = apply_file(
        &mut settings,
        r##"
[theme.title]
text_color = "white"
"##,
    )
    .unwrap_err();
    assert!(err.to_string().contains("malformed color"), "{err}");
}

#[test]
fn env_overrides_win_and_bad_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("BANK_GUI__WINDOW_TITLE", "From env"),
            ("BANK_GUI__WINDOW_WIDTH", "wide"),
            ("BANK_GUI__WINDOW_HEIGHT", "600"),
            ("BANK_GUI__ALWAYS_ON_TOP", "off"),
            ("BANK_GUI__START_SCREEN", "Gallery"),
        ]),
    );
    assert_eq!(settings.window_title, "From env");
    assert_eq!(settings.window_width, 1080.0);
    assert_eq!(settings.window_height, 600.0);
    assert!(!settings.always_on_top);
    assert_eq!(settings.start_screen, StartScreen::Gallery);
}

#[test]
fn non_positive_dimensions_keep_defaults() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "window_width = -5.0\nwindow_height = 0.0\n").expect("parse");
    assert_eq!((settings.window_width, settings.window_height), (1080.0, 720.0));
}

#[test]
fn explicit_config_path_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("bank_gui_missing_{suffix}.toml"));
    assert!(load_settings(Some(&missing)).is_err());
}

#[test]
fn loads_settings_from_explicit_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("bank_gui_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join(CONFIG_FILE_NAME);
    fs::write(&path, "window_title = \"From file\"\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    // An ambient BANK_GUI__WINDOW_TITLE would take precedence.
    if env::var("BANK_GUI__WINDOW_TITLE").is_err() {
        assert_eq!(settings.window_title, "From file");
    }

    fs::remove_dir_all(temp_root).expect("cleanup");
}
