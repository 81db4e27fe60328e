// Application state for the typing screen
//
// Owns the typing session and the resolved theme, and translates key events
// into session operations. Kept free of terminal I/O so it can be driven
// directly from tests.

use crate::config::Config;
use crate::theme::{Theme, ThemeConfig};
use crate::typing::{CursorType, TypingSession};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How long the cursor stays in each blink phase
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

pub struct App {
    pub session: TypingSession,
    pub theme: Theme,
    theme_config: ThemeConfig,
    cursor_type: CursorType,
    cursor_blink: bool,
    cursor_visible: bool,
    last_blink: Instant,
    finished: bool,
    pub should_quit: bool,
}

impl App {
    /// Create app state from config (resolves theme and practice text)
    pub fn with_config(config: &Config) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };
        let theme = Theme::by_name_with_config(&config.theme, &theme_config);
        tracing::info!(theme = %theme.name, cursor = config.cursor.as_str(), "Starting typing session");

        let styles = Rc::new(theme.word_styles());
        let session = TypingSession::new(config.practice_text(), styles, config.cursor);

        Self {
            session,
            theme,
            theme_config,
            cursor_type: config.cursor,
            cursor_blink: config.cursor_blink,
            cursor_visible: true,
            last_blink: Instant::now(),
            finished: false,
            should_quit: false,
        }
    }

    pub fn cursor_type(&self) -> CursorType {
        self.cursor_type
    }

    /// Whether the cursor is drawn this frame
    pub fn show_cursor(&self) -> bool {
        !self.cursor_blink || self.cursor_visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle a key event from the terminal
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Release events arrive on some platforms; auto-repeat counts as typing
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab => self.restart(),
            KeyCode::F(2) => self.toggle_cursor_type(),
            KeyCode::F(3) => self.next_theme(),
            KeyCode::Backspace => {
                self.session.backspace();
                self.finished = self.session.is_finished();
                self.wake_cursor();
            }
            KeyCode::Char(ch) => {
                if self.finished {
                    return;
                }
                self.session.type_char(ch);
                self.wake_cursor();
                if self.session.is_finished() {
                    self.finished = true;
                    tracing::info!("Practice text completed");
                }
            }
            _ => {}
        }
    }

    /// Advance the blink timer
    pub fn tick(&mut self, now: Instant) {
        if !self.cursor_blink {
            return;
        }
        if now.saturating_duration_since(self.last_blink) >= BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = now;
        }
    }

    /// Clear all input and start the text over
    pub fn restart(&mut self) {
        tracing::debug!("Restarting typing session");
        self.session.reset();
        self.finished = false;
        self.wake_cursor();
    }

    fn toggle_cursor_type(&mut self) {
        self.cursor_type = match self.cursor_type {
            CursorType::Block => CursorType::Underline,
            CursorType::Underline => CursorType::Block,
        };
        self.session.set_cursor_type(self.cursor_type);
    }

    /// Switch to the next available theme, keeping typed input
    fn next_theme(&mut self) {
        let themes = Theme::list_available();
        if themes.is_empty() {
            return;
        }
        let current = themes
            .iter()
            .position(|t| t.eq_ignore_ascii_case(&self.theme.name));
        let next = match current {
            Some(i) => &themes[(i + 1) % themes.len()],
            None => &themes[0],
        };

        self.theme = Theme::by_name_with_config(next, &self.theme_config);
        self.session.set_styles(Rc::new(self.theme.word_styles()));
        tracing::debug!(theme = %self.theme.name, "Theme changed");
    }

    // Keep the cursor solid while the user is typing
    fn wake_cursor(&mut self) {
        self.cursor_visible = true;
        self.last_blink = Instant::now();
    }
}
