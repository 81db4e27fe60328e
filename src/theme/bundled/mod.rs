//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/typist/themes/ on first run.
//! Users can then modify them freely.

mod dracula;
mod gruvbox_dark;
mod nord;
mod terminal_ansi;
mod typist_dark;
mod typist_light;

pub use dracula::THEME as DRACULA;
pub use gruvbox_dark::THEME as GRUVBOX_DARK;
pub use nord::THEME as NORD;
pub use terminal_ansi::THEME as TERMINAL_ANSI;
pub use typist_dark::THEME as TYPIST_DARK;
pub use typist_light::THEME as TYPIST_LIGHT;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Typist_Dark.toml",
        content: TYPIST_DARK,
    },
    BundledTheme {
        filename: "Typist_Light.toml",
        content: TYPIST_LIGHT,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: NORD,
    },
    BundledTheme {
        filename: "Dracula.toml",
        content: DRACULA,
    },
    BundledTheme {
        filename: "Gruvbox_Dark.toml",
        content: GRUVBOX_DARK,
    },
    BundledTheme {
        filename: "Terminal_ANSI.toml",
        content: TERMINAL_ANSI,
    },
];

/// Display names of all bundled themes ("Typist_Dark.toml" -> "Typist Dark")
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}
