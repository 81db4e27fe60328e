//! Cursor rendering strategies
//!
//! The cursor is drawn on the character at the insertion point of the active
//! word. Words hold a `Box<dyn CursorRender>` so the strategy can be swapped
//! at runtime (e.g. from the settings or the command line).

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use serde::Deserialize;

/// Available cursor shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorType {
    /// Reversed cell over the next character
    #[default]
    Block,
    /// Underlined next character
    Underline,
}

impl CursorType {
    /// Parse cursor type string from config or CLI
    /// Unknown values fall back to the default block cursor
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "underline" | "under" => Self::Underline,
            _ => Self::Block,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Underline => "underline",
        }
    }
}

/// Anything that can draw the character under the cursor
pub trait CursorRender {
    /// Render the character at the insertion point
    fn render(&self, ch: char) -> Span<'static>;
}

/// Cursor drawn from a `CursorType` and a base style
#[derive(Debug, Clone)]
pub struct Cursor {
    style: Style,
}

impl Cursor {
    pub fn new(kind: CursorType, base: Style) -> Self {
        let style = match kind {
            CursorType::Block => base.add_modifier(Modifier::REVERSED),
            CursorType::Underline => base.add_modifier(Modifier::UNDERLINED),
        };
        Self { style }
    }
}

impl CursorRender for Cursor {
    fn render(&self, ch: char) -> Span<'static> {
        Span::styled(ch.to_string(), self.style)
    }
}
