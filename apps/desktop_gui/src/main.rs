mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui_core::{
    screen::{gallery::compose_style_gallery, login::compose_login_screen},
    Screen,
};

use crate::config::{load_settings, Settings, StartScreen};
use crate::ui::app::BankGuiApp;

#[derive(Parser, Debug)]
#[command(name = "bank-gui", about = "Bank desktop client login screen")]
struct Cli {
    /// Settings file; defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    screen: Option<StartScreen>,
    /// Used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn compose_start_screen(settings: &Settings) -> anyhow::Result<Screen> {
    let screen = match settings.start_screen {
        StartScreen::Login => compose_login_screen(&settings.theme),
        StartScreen::Gallery => compose_style_gallery(),
    };
    screen.context("failed to compose start screen")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(screen) = cli.screen {
        settings.start_screen = screen;
    }
    let screen = compose_start_screen(&settings)?;

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(settings.window_title.clone())
        .with_inner_size([settings.window_width, settings.window_height]);
    if settings.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(title = %settings.window_title, "starting bank desktop client");
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(BankGuiApp::new(screen)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop client: {err}"))
}
