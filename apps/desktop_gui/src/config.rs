use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use ui_core::screen::login::LoginTheme;

pub const CONFIG_FILE_NAME: &str = "bank_gui.toml";
const ENV_PREFIX: &str = "BANK_GUI__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StartScreen {
    Login,
    Gallery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub always_on_top: bool,
    pub start_screen: StartScreen,
    pub theme: LoginTheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Welcome to the bank! | Login Page".into(),
            window_width: 1080.0,
            window_height: 720.0,
            always_on_top: true,
            start_screen: StartScreen::Login,
            theme: LoginTheme::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    always_on_top: Option<bool>,
    start_screen: Option<StartScreen>,
    theme: Option<LoginTheme>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bank_gui").join(CONFIG_FILE_NAME))
}

/// Defaults, then the config file, then `BANK_GUI__*` environment overrides.
///
/// An explicit `path` must exist; the per-user default path is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };
    if let Some(file_path) = file_path {
        let raw = fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read config file '{}'", file_path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", file_path.display()))?;
        tracing::info!(path = %file_path.display(), "loaded settings file");
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: SettingsFile = toml::from_str(raw)?;

    if let Some(v) = file.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file.window_width {
        set_dimension(&mut settings.window_width, "window_width", v);
    }
    if let Some(v) = file.window_height {
        set_dimension(&mut settings.window_height, "window_height", v);
    }
    if let Some(v) = file.always_on_top {
        settings.always_on_top = v;
    }
    if let Some(v) = file.start_screen {
        settings.start_screen = v;
    }
    if let Some(theme) = file.theme {
        settings.theme = theme.merged_with_defaults();
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |key: &str| lookup(&format!("{ENV_PREFIX}{key}")).filter(|v| !v.trim().is_empty());

    if let Some(v) = var("WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = var("WINDOW_WIDTH") {
        match v.trim().parse::<f32>() {
            Ok(parsed) => set_dimension(&mut settings.window_width, "window_width", parsed),
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric window width override"),
        }
    }
    if let Some(v) = var("WINDOW_HEIGHT") {
        match v.trim().parse::<f32>() {
            Ok(parsed) => set_dimension(&mut settings.window_height, "window_height", parsed),
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric window height override"),
        }
    }
    if let Some(v) = var("ALWAYS_ON_TOP") {
        match parse_bool(&v) {
            Some(parsed) => settings.always_on_top = parsed,
            None => tracing::warn!(value = %v, "ignoring non-boolean always-on-top override"),
        }
    }
    if let Some(v) = var("START_SCREEN") {
        match v.trim().to_ascii_lowercase().as_str() {
            "login" => settings.start_screen = StartScreen::Login,
            "gallery" => settings.start_screen = StartScreen::Gallery,
            _ => tracing::warn!(value = %v, "ignoring unknown start screen override"),
        }
    }
}

fn set_dimension(slot: &mut f32, name: &str, value: f32) {
    if value.is_finite() && value > 0.0 {
        *slot = value;
    } else {
        tracing::warn!(setting = name, value, "ignoring non-positive window dimension");
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
