//! Configuration for the typing trainer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/typist/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::typing::CursorType;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when neither the environment nor the config file names one
pub const DEFAULT_THEME: &str = "Typist Dark";

/// Practice text used when no text is configured or passed on the command line
pub const DEFAULT_TEXT: &str = "the quick brown fox jumps over the lazy dog";

/// Environment variable overriding the theme
pub const ENV_THEME: &str = "TYPIST_THEME";

/// Environment variable overriding the cursor shape
pub const ENV_CURSOR: &str = "TYPIST_CURSOR";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name or path to a .toml theme file
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Cursor shape drawn at the insertion point
    pub cursor: CursorType,

    /// Blink the cursor while waiting for input
    pub cursor_blink: bool,

    /// Practice text (falls back to DEFAULT_TEXT)
    pub text: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            cursor: CursorType::Block,
            cursor_blink: true,
            text: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub cursor: Option<CursorType>,
    pub cursor_blink: Option<bool>,
    pub text: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/typist/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("typist").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail loudly rather than
    /// silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env(ENV_THEME)
            .filter(|t| !t.trim().is_empty())
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Cursor: env > file > default (unknown values mean block)
        let cursor = env(ENV_CURSOR)
            .map(|c| CursorType::from_str(&c))
            .or(file.cursor)
            .unwrap_or_default();

        // File only
        let use_theme_background = file.use_theme_background.unwrap_or(true);
        let cursor_blink = file.cursor_blink.unwrap_or(true);
        let text = file.text.filter(|t| !t.trim().is_empty());

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            use_theme_background,
            cursor,
            cursor_blink,
            text,
            logging,
        }
    }

    /// Text to practice: configured text or the built-in default
    pub fn practice_text(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_TEXT)
    }
}
