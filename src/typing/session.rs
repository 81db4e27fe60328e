//! Sequence of words being typed
//!
//! The session turns a practice text into `Word`s (with a space word between
//! every pair of words), keeps exactly one of them active, and routes
//! keystrokes to it. Scoring is left to the caller.

use super::cursor::CursorType;
use super::styles::WordStyles;
use super::word::Word;
use ratatui::text::{Line, Span};
use std::rc::Rc;

pub struct TypingSession {
    words: Vec<Word>,
    current: usize,
}

impl TypingSession {
    /// Build a session from whitespace-separated text
    pub fn new(text: &str, styles: Rc<WordStyles>, cursor_type: CursorType) -> Self {
        let mut words = Vec::new();
        for (i, target) in text.split_whitespace().enumerate() {
            if i > 0 {
                words.push(Word::space(styles.clone(), cursor_type));
            }
            words.push(Word::new(target, styles.clone(), cursor_type));
        }

        if let Some(first) = words.first_mut() {
            first.set_active(true);
        }

        tracing::debug!("Typing session created with {} words", words.len());
        Self { words, current: 0 }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.current)
    }

    /// Whether the last word has been fully typed (or skipped)
    pub fn is_finished(&self) -> bool {
        self.words.last().is_some_and(|w| w.is_complete())
    }

    /// Route a typed character to the current word
    pub fn type_char(&mut self, ch: char) {
        let Some(word) = self.words.get_mut(self.current) else {
            return;
        };

        if word.is_space() {
            word.type_char(ch);
            self.advance();
            return;
        }

        if ch == ' ' {
            if !word.has_started() {
                return;
            }
            if !word.is_complete() {
                tracing::debug!("Skipping word {}", self.current);
                word.skip();
            }
            if self.advance() {
                // the space that ended the word also fills the separator
                if let Some(space) = self.words.get_mut(self.current) {
                    space.type_char(' ');
                }
                self.advance();
            }
            return;
        }

        word.type_char(ch);
    }

    /// Delete backwards, stepping into the previous word when the current one
    /// is empty. Returns `false` at the very start of the text.
    pub fn backspace(&mut self) -> bool {
        let Some(word) = self.words.get_mut(self.current) else {
            return false;
        };
        if word.backspace() {
            return true;
        }
        if self.current == 0 {
            return false;
        }

        self.focus(self.current - 1);
        self.words[self.current].backspace()
    }

    /// Clear all input and start over from the first word
    pub fn reset(&mut self) {
        for word in &mut self.words {
            word.reset();
        }
        self.focus(0);
    }

    pub fn set_cursor_type(&mut self, cursor_type: CursorType) {
        for word in &mut self.words {
            word.set_cursor_type(cursor_type);
        }
    }

    pub fn set_styles(&mut self, styles: Rc<WordStyles>) {
        for word in &mut self.words {
            word.set_styles(styles.clone());
        }
    }

    /// Move focus to the next word; returns `false` on the last word
    fn advance(&mut self) -> bool {
        if self.current + 1 >= self.words.len() {
            return false;
        }
        self.focus(self.current + 1);
        true
    }

    fn focus(&mut self, index: usize) {
        if let Some(word) = self.words.get_mut(self.current) {
            word.set_active(false);
        }
        self.current = index;
        if let Some(word) = self.words.get_mut(self.current) {
            word.set_active(true);
        }
    }

    /// Render all words, wrapped at word boundaries to `width` columns
    ///
    /// A word wider than `width` gets a line of its own. Space words that fall
    /// on a wrap point stay at the end of the previous line.
    ///
    /// The returned lines borrow the text of each word's cached render.
    pub fn render_lines(&mut self, width: u16, show_cursor: bool) -> Vec<Line<'_>> {
        for word in &mut self.words {
            word.render(show_cursor);
        }

        let width = usize::from(width.max(1));
        let mut lines = Vec::new();
        let mut spans: Vec<Span<'_>> = Vec::new();
        let mut used = 0;

        for word in &self.words {
            let Some((rendered, cols)) = word.last_render() else {
                continue;
            };

            if !word.is_space() && used > 0 && used + cols > width {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            spans.extend(
                rendered
                    .spans
                    .iter()
                    .map(|s| Span::styled(s.content.as_ref(), s.style)),
            );
            used += cols;
        }

        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }
}
