use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use ui_core::{
    paint::{glow_strokes, GlowStroke, GLOW_CORNER_RADIUS},
    screen::login::{compose_login_screen, LoginTheme},
};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the login screen grid as JSON.
    Layout {
        /// Theme file with a `[theme]` table; built-in theme otherwise.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the label glow rings as JSON.
    Glow,
    /// Compose the login screen from a settings file and report problems.
    CheckTheme {
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    theme: Option<LoginTheme>,
}

#[derive(Debug, Serialize)]
struct GlowReport {
    corner_radius: f32,
    strokes: Vec<GlowStroke>,
}

fn load_theme(path: Option<&PathBuf>) -> Result<LoginTheme> {
    let Some(path) = path else {
        return Ok(LoginTheme::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let file: ThemeFile =
        toml::from_str(&raw).with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(file.theme.unwrap_or_default().merged_with_defaults())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Layout { config } => {
            let theme = load_theme(config.as_ref())?;
            let screen = compose_login_screen(&theme)?;
            println!("{}", serde_json::to_string_pretty(screen.layout())?);
        }
        Command::Glow => {
            let report = GlowReport {
                corner_radius: GLOW_CORNER_RADIUS,
                strokes: glow_strokes(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::CheckTheme { config } => {
            let theme = load_theme(Some(&config))?;
            let screen = compose_login_screen(&theme)
                .with_context(|| format!("theme in '{}' is unusable", config.display()))?;
            println!(
                "ok: {} widgets on {} rows",
                screen.widgets().count(),
                screen.layout().row_count()
            );
        }
    }

    Ok(())
}
