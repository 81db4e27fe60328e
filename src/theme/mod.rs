// Theme system for the TUI
//
// - TomlTheme: file format with explicit typing-state colors
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/typist/themes/*.toml (or a .toml path)
// 2. Bundled themes (extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod names;
mod toml_format;

pub use names::{display_name, is_valid_name, theme_path};
pub use toml_format::TomlTheme;

use crate::typing::WordStyles;
use ratatui::style::{Color, Style};
use std::path::{Path, PathBuf};

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub muted: Color,

    // ─── Typing State Colors ─────────────────────────────────
    pub untyped: Color,
    pub input: Color,
    pub error: Color,
    pub partial_error: Color,
    pub cursor: Color,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!("Theme '{}' not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        // External file first, also with spaces replaced by underscores
        let normalized = name.replace(' ', "_");
        for candidate in [theme_path(name), theme_path(&normalized)] {
            if let Some(theme) = Self::load_file(&candidate, config) {
                return Some(theme);
            }
        }

        // Bundled themes (compiled into binary)
        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| match TomlTheme::from_str(t.content) {
                Ok(toml_theme) => Some(Self::from_toml(toml_theme, config)),
                Err(e) => {
                    tracing::warn!("Bundled theme {} is invalid: {}", t.filename, e);
                    None
                }
            })
    }

    fn load_file(path: &Path, config: &ThemeConfig) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Could not read theme {}: {}", path.display(), e);
                return None;
            }
        };

        match TomlTheme::from_str(&contents) {
            Ok(toml_theme) => {
                tracing::debug!("Loaded theme from {}", path.display());
                Some(Self::from_toml(toml_theme, config))
            }
            Err(e) => {
                tracing::warn!("Failed to parse theme {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get themes directory path
    pub(crate) fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("typist").join("themes"))
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name,

            background,
            foreground: parse(&toml.ui.foreground),
            title: parse(&toml.ui.title),
            // Muted text (explicit or fallback to untyped)
            muted: toml
                .ui
                .muted
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.typing.untyped)),

            untyped: parse(&toml.typing.untyped),
            input: parse(&toml.typing.input),
            error: parse(&toml.typing.error),
            partial_error: parse(&toml.typing.partial_error),
            cursor: parse(&toml.typing.cursor),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(29, 32, 33)
        } else {
            Color::Reset
        };

        Self {
            name: "Typist Dark (Fallback)".to_string(),

            background,
            foreground: Color::Rgb(213, 196, 161),
            title: Color::Rgb(131, 165, 152),
            muted: Color::Rgb(102, 92, 84),

            untyped: Color::Rgb(102, 92, 84),
            input: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            partial_error: Color::Rgb(250, 189, 47),
            cursor: Color::Rgb(235, 219, 178),
        }
    }

    /// Styles handed to every word for rendering
    pub fn word_styles(&self) -> WordStyles {
        WordStyles {
            untyped: Style::default().fg(self.untyped),
            input: Style::default().fg(self.input),
            error: Style::default().fg(self.error),
            partial_error: Style::default().fg(self.partial_error),
            cursor: Style::default().fg(self.cursor),
        }
    }

    /// Base style for text drawn directly on the background
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        // Add external themes from config dir
        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Convert filename format (underscore) to display format (space)
                            let display = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display)) {
                                themes.push(display);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name("Typist Dark")
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Check if we've already extracted (marker file)
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
    tracing::debug!("Extracted bundled themes to {}", themes_dir.display());
}
