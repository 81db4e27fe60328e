// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand starts a typing session. Subcommands:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the current layout (keeps values)
// - config --path: Show config file path
// - themes: List available themes

use crate::config::{Config, VERSION};
use crate::theme::{self, Theme};
use crate::typing::CursorType;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Typist - typing practice in the terminal
#[derive(Parser, Debug)]
#[command(name = "typist")]
#[command(version = VERSION)]
#[command(about = "Typing practice in the terminal", long_about = None)]
pub struct Cli {
    /// Text to practice (overrides the configured text)
    #[arg(long, short)]
    pub text: Option<String>,

    /// Theme name or path to a .toml theme file
    #[arg(long, value_parser = parse_theme_name)]
    pub theme: Option<String>,

    /// Cursor shape: block or underline
    #[arg(long, value_parser = parse_cursor)]
    pub cursor: Option<CursorType>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Rewrite config with the current layout (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// List available themes
    Themes,
}

fn parse_theme_name(s: &str) -> Result<String, String> {
    if theme::is_valid_name(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "invalid theme name '{}' (use letters, digits, '_', '-', or a path to an existing .toml file)",
            s
        ))
    }
}

fn parse_cursor(s: &str) -> Result<CursorType, String> {
    match s.trim().to_lowercase().as_str() {
        "block" | "underline" | "under" => Ok(CursorType::from_str(s)),
        _ => Err(format!("unknown cursor '{}' (expected block or underline)", s)),
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(cursor) = self.cursor {
            config.cursor = cursor;
        }
        if let Some(text) = self.text.as_ref().filter(|t| !t.trim().is_empty()) {
            config.text = Some(text.clone());
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show()?;
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit()?;
            } else if *update {
                handle_config_update()?;
            } else {
                // No flag provided, show help
                println!("Usage: typist config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Rewrite config with the current layout (preserves user values)");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        Some(Commands::Themes) => {
            handle_themes();
            Ok(true)
        }
        None => Ok(false), // No subcommand, start typing
    }
}

fn require_config_path() -> Result<std::path::PathBuf> {
    Config::config_path().ok_or_else(|| anyhow!("Could not determine config path"))
}

fn handle_config_path() -> Result<()> {
    println!("{}", require_config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = require_config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default()
        .save()
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Values come from the file (and env), layout from to_toml
    let existing = Config::from_env()?;

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    existing
        .save()
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

fn handle_themes() {
    for name in Theme::list_available() {
        println!("{}", theme::display_name(&name));
    }
}
