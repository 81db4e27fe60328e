//! Named styles used when rendering a word
//!
//! A `Word` never decides colors on its own. It asks a `WordStyles` to render
//! each character under one of four named styles, so the same word model works
//! with any theme (or with plain `Style::default()` in tests).

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Which of the named styles a piece of text is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Not typed yet (also used for skipped positions)
    Untyped,
    /// Typed correctly
    Input,
    /// Typed wrong, or typed past the end of the target
    Error,
    /// Typed correctly, but the word as a whole is in error
    PartialError,
}

/// Style set for word rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStyles {
    pub untyped: Style,
    pub input: Style,
    pub error: Style,
    pub partial_error: Style,
    /// Base style for the cursor; each `CursorType` decorates it differently
    pub cursor: Style,
}

impl WordStyles {
    /// Get the style for a kind
    pub fn style(&self, kind: StyleKind) -> Style {
        match kind {
            StyleKind::Untyped => self.untyped,
            StyleKind::Input => self.input,
            StyleKind::Error => self.error,
            StyleKind::PartialError => self.partial_error,
        }
    }

    /// Render text under one of the named styles
    pub fn render(&self, kind: StyleKind, text: impl Into<String>) -> Span<'static> {
        Span::styled(text.into(), self.style(kind))
    }

    /// Render a single character under one of the named styles
    pub fn render_char(&self, kind: StyleKind, ch: char) -> Span<'static> {
        self.render(kind, ch.to_string())
    }

    /// Terminal-palette styles, usable without any theme
    pub fn ansi() -> Self {
        use ratatui::style::Color;

        Self {
            untyped: Style::default().fg(Color::DarkGray),
            input: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            partial_error: Style::default().fg(Color::Yellow),
            cursor: Style::default().fg(Color::White),
        }
    }
}

impl Default for WordStyles {
    fn default() -> Self {
        Self::ansi()
    }
}
