//! Theme name helpers
//!
//! Themes are referred to either by name ("Typist Dark", "nord", "-nord") or
//! by a path to a `.toml` file.

use super::Theme;
use std::path::{Path, PathBuf};

const TOML_SUFFIX: &str = ".toml";
const SEPARATORS: &[char] = &['/', '\\'];

/// Resolve a theme name to the file it would be loaded from
///
/// A leading `-` is ignored. Names ending in `.toml` are used as paths
/// verbatim; anything else lives in the themes directory. Without a home
/// directory the path is relative to the working directory.
pub fn theme_path(name: &str) -> PathBuf {
    let name = name.strip_prefix('-').unwrap_or(name);
    if name.ends_with(TOML_SUFFIX) {
        return PathBuf::from(name);
    }

    let filename = format!("{}{}", name, TOML_SUFFIX);
    match Theme::themes_dir() {
        Some(dir) => dir.join(filename),
        None => Path::new("themes").join(filename),
    }
}

/// Human-friendly theme name: "path/to/gruvbox_dark.toml" -> "Gruvbox Dark"
pub fn display_name(name: &str) -> String {
    let base = name.rsplit(SEPARATORS).next().unwrap_or(name);
    let base = base.strip_suffix(TOML_SUFFIX).unwrap_or(base);

    base.split(&['_', '-', ' '][..])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a theme name can be used
///
/// Paths (anything with a separator) must exist. Bare names may contain
/// letters, digits, `_`, `-` and spaces; a dot is only allowed as part of a
/// `.toml` path.
pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    if name.contains('.') && !name.ends_with(TOML_SUFFIX) {
        return false;
    }

    if name.contains(SEPARATORS) {
        return Path::new(name).exists();
    }

    name.chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == ' ')
}
