//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a value as a TOML basic string
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let text_line = match &self.text {
            Some(text) => format!("text = {}", quoted(text)),
            None => "# text = \"the quick brown fox jumps over the lazy dog\"".to_string(),
        };

        format!(
            r#"# typist configuration

# Theme name (Typist Dark, Typist Light, Nord, Dracula, Gruvbox Dark, Terminal ANSI)
# or a path to a .toml theme file. Run `typist themes` for the full list.
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Cursor shape: block, underline
cursor = "{cursor}"
cursor_blink = {blink}

# Practice text used when --text is not given
{text_line}

# Logging
# RUST_LOG overrides the level. Logs only go to a file because the
# terminal is taken over by the typing screen.
[logging]
level = {log_level}
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = quoted(&self.theme),
            use_bg = self.use_theme_background,
            cursor = self.cursor.as_str(),
            blink = self.cursor_blink,
            text_line = text_line,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
