// Typist - typing practice in the terminal
//
// Shows a practice text and colours every character as it is typed.
//
// Architecture:
// - Typing model: Word (per-word diff + render cache) and TypingSession
// - Theme: TOML themes resolved into the styles words render with
// - TUI (ratatui): draws the session and feeds it key events
// - Config/CLI: file + env + command-line settings

mod cli;
mod config;
mod logging;
mod theme;
mod tui;
mod typing;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI subcommands first (config --show, --reset, themes, ...)
    // If a command was handled, exit early
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    // env > file > defaults, then command-line overrides on top
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _log_guard = logging::init(&config.logging);

    tracing::info!(version = config::VERSION, "Starting typist");
    tui::run(&config)?;
    tracing::info!("Shutdown complete");

    Ok(())
}
