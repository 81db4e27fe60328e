//! A single word of the practice text
//!
//! `Word` tracks what the user has to type (`target`), what they actually typed
//! (`typed`), and renders the visual diff between the two.
//!
//! # Render cache
//!
//! The host redraws every word on every frame, so rendering must be cheap for
//! the words that did not change. Every mutator bumps `version`; a rendered
//! line is reused only while the word is inactive and the version it was built
//! from is still current. The active word is rebuilt on every call because its
//! cursor and state change with each keystroke.

use super::cursor::{Cursor, CursorRender, CursorType};
use super::styles::{StyleKind, WordStyles};
use ratatui::text::{Line, Span};
use std::rc::Rc;
use std::time::Instant;
use unicode_width::UnicodeWidthChar;

/// Correctness of the typed input relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordState {
    /// Nothing typed yet
    #[default]
    Untyped,
    /// Typed input equals the target
    Perfect,
    /// Typed input is a correct, unfinished prefix of the target
    Imperfect,
    /// Some position is wrong, or the word was skipped
    Error,
}

/// One position of typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A character the user entered
    Typed(char),
    /// Filled in when the word was abandoned before this position
    Skipped,
}

/// Last rendered output and the version it was built from
struct Rendered {
    version: u64,
    line: Line<'static>,
    /// Display columns of `line`
    width: usize,
}

/// Per-word typing state with a render cache
pub struct Word {
    target: Vec<char>,
    typed: Vec<Slot>,
    state: WordState,
    active: bool,
    cursor: Box<dyn CursorRender>,
    /// Shape of the built-in cursor; `None` once a custom one is injected
    cursor_type: Option<CursorType>,
    styles: Rc<WordStyles>,
    version: u64,
    rendered: Option<Rendered>,
}

impl Word {
    /// Create a word for `target` (copied), drawing through `styles`
    pub fn new(target: &str, styles: Rc<WordStyles>, cursor_type: CursorType) -> Self {
        let target: Vec<char> = target.chars().collect();
        let cursor = Box::new(Cursor::new(cursor_type, styles.cursor));

        Self {
            typed: Vec::with_capacity(target.len()),
            target,
            state: WordState::Untyped,
            active: false,
            cursor,
            cursor_type: Some(cursor_type),
            styles,
            version: 0,
            rendered: None,
        }
    }

    /// Create the single-space word that separates two words
    pub fn space(styles: Rc<WordStyles>, cursor_type: CursorType) -> Self {
        Self::new(" ", styles, cursor_type)
    }

    // ─────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────

    /// Type a character into the word
    ///
    /// Normal words grow up to the target length; once full, further input
    /// overwrites the last position. A space word holds exactly one character.
    pub fn type_char(&mut self, ch: char) {
        if self.is_space() {
            self.typed.clear();
            self.typed.push(Slot::Typed(ch));
            self.state = if ch == ' ' {
                WordState::Perfect
            } else {
                WordState::Error
            };
            self.invalidate();
            return;
        }

        if self.typed.len() < self.target.len() {
            self.typed.push(Slot::Typed(ch));
        } else if let Some(last) = self.typed.last_mut() {
            *last = Slot::Typed(ch);
        }

        self.update_state();
        self.invalidate();
    }

    /// Remove the last typed character
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        if self.typed.pop().is_none() {
            return false;
        }
        self.update_state();
        self.invalidate();
        true
    }

    /// Abandon the word: pad untyped positions with `Slot::Skipped`
    pub fn skip(&mut self) {
        let target_len = self.target.len();
        if self.typed.len() < target_len {
            self.typed.resize(target_len, Slot::Skipped);
        }
        self.state = WordState::Error;
        self.invalidate();
    }

    /// Clear typed input so the word can be typed again
    pub fn reset(&mut self) {
        self.typed.clear();
        self.state = WordState::Untyped;
        self.invalidate();
    }

    /// Give or take input focus
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.invalidate();
        }
    }

    /// Replace the cursor with one of the built-in shapes
    pub fn set_cursor_type(&mut self, cursor_type: CursorType) {
        self.cursor = Box::new(Cursor::new(cursor_type, self.styles.cursor));
        self.cursor_type = Some(cursor_type);
        self.invalidate();
    }

    /// Replace the cursor with any rendering strategy
    ///
    /// A custom cursor keeps its own style across `set_styles`.
    pub fn set_cursor(&mut self, cursor: Box<dyn CursorRender>) {
        self.cursor = cursor;
        self.cursor_type = None;
        self.invalidate();
    }

    /// Replace the style set (e.g. after a theme change)
    ///
    /// The built-in cursor is rebuilt from the new cursor style.
    pub fn set_styles(&mut self, styles: Rc<WordStyles>) {
        if let Some(cursor_type) = self.cursor_type {
            self.cursor = Box::new(Cursor::new(cursor_type, styles.cursor));
        }
        self.styles = styles;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn update_state(&mut self) {
        if self.typed.is_empty() {
            self.state = WordState::Untyped;
            return;
        }

        if self.is_space() {
            self.state = if self.typed == [Slot::Typed(' ')] {
                WordState::Perfect
            } else {
                WordState::Error
            };
            return;
        }

        if self.typed.contains(&Slot::Skipped) {
            self.state = WordState::Error;
            return;
        }

        let prefix_matches = self
            .typed
            .iter()
            .zip(&self.target)
            .all(|(slot, &t)| *slot == Slot::Typed(t));

        self.state = match self.typed.len().cmp(&self.target.len()) {
            std::cmp::Ordering::Equal if prefix_matches => WordState::Perfect,
            std::cmp::Ordering::Less if prefix_matches => WordState::Imperfect,
            _ => WordState::Error,
        };
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> WordState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn target(&self) -> &[char] {
        &self.target
    }

    #[cfg(test)]
    pub fn typed(&self) -> &[Slot] {
        &self.typed
    }

    /// Whether every target position has been typed or skipped
    pub fn is_complete(&self) -> bool {
        let complete = self.typed.len() >= self.target.len();
        tracing::trace!(
            target_word = %self.target.iter().collect::<String>(),
            target_len = self.target.len(),
            typed_len = self.typed.len(),
            complete,
            "Word completion check"
        );
        complete
    }

    pub fn has_started(&self) -> bool {
        !self.typed.is_empty()
    }

    /// Whether this is the single-space separator word
    pub fn is_space(&self) -> bool {
        self.target == [' ']
    }

    /// Whether the next `render` call will be served from the cache
    #[cfg(test)]
    pub fn is_cached(&self) -> bool {
        !self.active
            && self
                .rendered
                .as_ref()
                .is_some_and(|r| r.version == self.version)
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────

    /// Render the typed/target diff as a styled line
    ///
    /// `show_cursor` only has an effect on the active word (it lets the host
    /// blink the cursor). Inactive, unchanged words return the cached line.
    pub fn render(&mut self, show_cursor: bool) -> &Line<'static> {
        let rendered = match self.rendered.take() {
            Some(r) if !self.active && r.version == self.version => r,
            _ => {
                let started = Instant::now();
                let line = self.build_line(show_cursor);
                if self.active {
                    tracing::trace!(
                        elapsed = ?started.elapsed(),
                        spans = line.spans.len(),
                        "Active word render completed"
                    );
                }
                let width = display_width(&line);
                Rendered {
                    version: self.version,
                    line,
                    width,
                }
            }
        };

        &self.rendered.insert(rendered).line
    }

    /// Output of the last `render` call and its width in display columns
    ///
    /// Borrowing this instead of cloning the line keeps redraws of unchanged
    /// words free of allocation.
    pub fn last_render(&self) -> Option<(&Line<'static>, usize)> {
        self.rendered.as_ref().map(|r| (&r.line, r.width))
    }

    fn build_line(&self, show_cursor: bool) -> Line<'static> {
        let styles = &self.styles;
        let with_cursor = show_cursor && self.active;

        if self.is_space() {
            let span = match self.typed.first() {
                None if with_cursor => self.cursor.render(' '),
                None => styles.render(StyleKind::Untyped, " "),
                Some(Slot::Typed(' ')) => styles.render(StyleKind::Input, " "),
                Some(Slot::Typed(ch)) => styles.render_char(StyleKind::Error, *ch),
                Some(Slot::Skipped) => styles.render(StyleKind::Error, " "),
            };
            return Line::from(span);
        }

        let target_len = self.target.len();
        let typed_len = self.typed.len();
        let len = target_len.max(typed_len);
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(len);

        for i in 0..len {
            if with_cursor && i == typed_len {
                let under = self.target.get(i).copied().unwrap_or(' ');
                spans.push(self.cursor.render(under));
                continue;
            }

            let span = match (self.typed.get(i), self.target.get(i)) {
                (None, Some(&t)) => styles.render_char(StyleKind::Untyped, t),
                (Some(&Slot::Typed(ch)), None) => styles.render_char(StyleKind::Error, ch),
                (Some(Slot::Skipped), Some(&t)) => styles.render_char(StyleKind::Untyped, t),
                (Some(&Slot::Typed(ch)), Some(&t)) if ch == t => {
                    let kind = if self.state == WordState::Error {
                        StyleKind::PartialError
                    } else {
                        StyleKind::Input
                    };
                    styles.render_char(kind, t)
                }
                (Some(&Slot::Typed(ch)), Some(_)) => styles.render_char(StyleKind::Error, ch),
                (Some(Slot::Skipped), None) | (None, None) => continue,
            };
            spans.push(span);
        }

        Line::from(spans)
    }
}

fn display_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .flat_map(|s| s.content.chars())
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier, Style};
    use std::cell::Cell;

    fn styles() -> Rc<WordStyles> {
        Rc::new(WordStyles {
            untyped: Style::default().fg(Color::DarkGray),
            input: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            partial_error: Style::default().fg(Color::Yellow),
            cursor: Style::default().fg(Color::White),
        })
    }

    fn word(target: &str) -> Word {
        Word::new(target, styles(), CursorType::Block)
    }

    fn type_str(word: &mut Word, s: &str) {
        for ch in s.chars() {
            word.type_char(ch);
        }
    }

    fn typed_string(word: &Word) -> String {
        word.typed()
            .iter()
            .map(|slot| match slot {
                Slot::Typed(ch) => *ch,
                Slot::Skipped => '_',
            })
            .collect()
    }

    /// (content, fg) pairs for each span of a rendered line
    fn spans(line: &Line<'_>) -> Vec<(String, Option<Color>)> {
        line.spans
            .iter()
            .map(|s| (s.content.to_string(), s.style.fg))
            .collect()
    }

    /// Cursor that counts how often it is asked to render
    struct CountingCursor(Rc<Cell<usize>>);

    impl CursorRender for CountingCursor {
        fn render(&self, ch: char) -> Span<'static> {
            self.0.set(self.0.get() + 1);
            Span::styled(ch.to_string(), Style::default().fg(Color::Magenta))
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_new_word_is_untyped() {
        let w = word("cat");
        assert_eq!(w.state(), WordState::Untyped);
        assert!(!w.has_started());
        assert!(!w.is_complete());
        assert!(!w.is_space());
        assert_eq!(w.target(), &['c', 'a', 't']);
    }

    #[test]
    fn test_mistype_then_correct() {
        let mut w = word("cat");
        type_str(&mut w, "cax");
        assert_eq!(typed_string(&w), "cax");
        assert_eq!(w.state(), WordState::Error);

        assert!(w.backspace());
        assert_eq!(typed_string(&w), "ca");
        assert_eq!(w.state(), WordState::Imperfect);

        w.type_char('t');
        assert_eq!(typed_string(&w), "cat");
        assert_eq!(w.state(), WordState::Perfect);
        assert!(w.is_complete());
    }

    #[test]
    fn test_typing_exact_target_is_perfect() {
        let mut w = word("naïve");
        type_str(&mut w, "naïve");
        assert_eq!(w.state(), WordState::Perfect);
        assert!(w.is_complete());
    }

    #[test]
    fn test_error_is_recomputed_not_remembered() {
        let mut w = word("dog");
        w.type_char('x');
        assert_eq!(w.state(), WordState::Error);
        assert!(w.backspace());
        assert_eq!(w.state(), WordState::Untyped);
        w.type_char('d');
        assert_eq!(w.state(), WordState::Imperfect);
    }

    #[test]
    fn test_overtyping_overwrites_last_slot() {
        let mut w = word("ab");
        type_str(&mut w, "abcd");
        assert_eq!(w.typed().len(), 2);
        assert_eq!(typed_string(&w), "ad");
        assert_eq!(w.state(), WordState::Error);

        w.type_char('b');
        assert_eq!(typed_string(&w), "ab");
        assert_eq!(w.state(), WordState::Perfect);
    }

    #[test]
    fn test_typed_never_exceeds_target() {
        let mut w = word("hey");
        for (i, ch) in "hello world".chars().enumerate() {
            w.type_char(ch);
            if i % 3 == 0 {
                w.backspace();
            }
            assert!(w.typed().len() <= w.target().len());
        }
    }

    #[test]
    fn test_backspace_to_empty() {
        let mut w = word("go");
        type_str(&mut w, "gx");
        assert!(w.backspace());
        assert!(w.backspace());
        assert!(!w.backspace());
        assert_eq!(w.state(), WordState::Untyped);
        assert!(!w.has_started());
    }

    #[test]
    fn test_skip_untyped_word() {
        let mut w = word("dog");
        w.skip();
        assert_eq!(w.typed(), &[Slot::Skipped; 3]);
        assert_eq!(w.state(), WordState::Error);
        assert!(w.is_complete());
    }

    #[test]
    fn test_skip_keeps_typed_prefix() {
        let mut w = word("house");
        type_str(&mut w, "ho");
        w.skip();
        assert_eq!(typed_string(&w), "ho___");
        assert_eq!(w.state(), WordState::Error);
        assert!(w.is_complete());
    }

    #[test]
    fn test_skip_complete_word_pads_nothing() {
        let mut w = word("ok");
        type_str(&mut w, "ok");
        w.skip();
        assert_eq!(typed_string(&w), "ok");
        assert_eq!(w.state(), WordState::Error);
    }

    #[test]
    fn test_backspace_after_skip_reclassifies() {
        let mut w = word("ab");
        w.type_char('a');
        w.skip();
        assert!(w.backspace());
        assert_eq!(w.state(), WordState::Imperfect);
    }

    #[test]
    fn test_reset() {
        let mut w = word("ab");
        type_str(&mut w, "ax");
        w.reset();
        assert_eq!(w.state(), WordState::Untyped);
        assert!(!w.has_started());
    }

    // ─────────────────────────────────────────────────────────────
    // Space word
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_space_word_rules() {
        let mut w = Word::space(styles(), CursorType::Block);
        assert!(w.is_space());

        w.type_char(' ');
        assert_eq!(w.state(), WordState::Perfect);

        w.type_char('x');
        assert_eq!(w.state(), WordState::Error);
        assert_eq!(w.typed(), &[Slot::Typed('x')]);

        w.type_char(' ');
        assert_eq!(w.state(), WordState::Perfect);
        assert_eq!(w.typed().len(), 1);
    }

    #[test]
    fn test_space_word_skip_is_error() {
        let mut w = Word::space(styles(), CursorType::Block);
        w.skip();
        assert_eq!(w.state(), WordState::Error);
        assert!(w.is_complete());

        let mut typed = Word::space(styles(), CursorType::Block);
        typed.type_char(' ');
        typed.skip();
        assert_eq!(typed.state(), WordState::Error);
    }

    #[test]
    fn test_space_word_backspace() {
        let mut w = Word::space(styles(), CursorType::Block);
        w.type_char('q');
        assert!(w.backspace());
        assert_eq!(w.state(), WordState::Untyped);
        assert!(!w.backspace());
    }

    #[test]
    fn test_space_word_render() {
        let mut w = Word::space(styles(), CursorType::Block);
        assert_eq!(spans(w.render(true)), vec![(" ".into(), Some(Color::DarkGray))]);

        w.set_active(true);
        let line = w.render(true).clone();
        assert!(line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(spans(w.render(false)), vec![(" ".into(), Some(Color::DarkGray))]);

        w.type_char(' ');
        assert_eq!(spans(w.render(true)), vec![(" ".into(), Some(Color::Green))]);

        w.type_char('z');
        assert_eq!(spans(w.render(true)), vec![("z".into(), Some(Color::Red))]);
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_render_untyped_is_dim() {
        let mut w = word("hi");
        assert_eq!(
            spans(w.render(false)),
            vec![
                ("h".into(), Some(Color::DarkGray)),
                ("i".into(), Some(Color::DarkGray))
            ]
        );
    }

    #[test]
    fn test_render_correct_prefix_and_cursor() {
        let mut w = word("cat");
        w.set_active(true);
        w.type_char('c');

        let line = w.render(true).clone();
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "c");
        assert_eq!(line.spans[0].style.fg, Some(Color::Green));
        // cursor sits on the next target character
        assert_eq!(line.spans[1].content, "a");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(line.spans[2].style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_render_cursor_hidden_when_not_requested() {
        let mut w = word("cat");
        w.set_active(true);
        w.type_char('c');
        let line = w.render(false).clone();
        assert!(!line.spans[1].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_render_cursor_needs_active_word() {
        let mut w = word("cat");
        w.type_char('c');
        let line = w.render(true).clone();
        assert!(line
            .spans
            .iter()
            .all(|s| !s.style.add_modifier.contains(Modifier::REVERSED)));
    }

    #[test]
    fn test_render_partial_error_prefix() {
        let mut w = word("cat");
        type_str(&mut w, "cax");
        assert_eq!(
            spans(w.render(false)),
            vec![
                ("c".into(), Some(Color::Yellow)),
                ("a".into(), Some(Color::Yellow)),
                ("x".into(), Some(Color::Red)),
            ]
        );
    }

    #[test]
    fn test_render_skipped_positions_show_target_dim() {
        let mut w = word("dog");
        w.type_char('d');
        w.skip();
        assert_eq!(
            spans(w.render(false)),
            vec![
                ("d".into(), Some(Color::Yellow)),
                ("o".into(), Some(Color::DarkGray)),
                ("g".into(), Some(Color::DarkGray)),
            ]
        );
    }

    #[test]
    fn test_render_mismatch_shows_typed_char() {
        let mut w = word("日本");
        w.type_char('本');
        let line = w.render(false).clone();
        assert_eq!(line.spans[0].content, "本");
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
        assert_eq!(line.spans[1].content, "本");
        assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_render_complete_active_word_has_no_cursor() {
        let mut w = word("ab");
        w.set_active(true);
        type_str(&mut w, "ab");
        let line = w.render(true).clone();
        assert_eq!(line.spans.len(), 2);
        assert!(line
            .spans
            .iter()
            .all(|s| s.style.fg == Some(Color::Green)));
    }

    // ─────────────────────────────────────────────────────────────
    // Cache
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_inactive_render_is_cached() {
        let mut w = word("cat");
        assert!(!w.is_cached());

        let first = w.render(false).clone();
        assert!(w.is_cached());
        let second = w.render(false).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_hit_does_not_rerender() {
        let calls = Rc::new(Cell::new(0));
        let mut w = word("cat");
        w.set_cursor(Box::new(CountingCursor(calls.clone())));

        w.set_active(true);
        w.render(true);
        w.render(true);
        assert_eq!(calls.get(), 2, "active word renders fresh every time");

        w.set_active(false);
        w.render(true);
        w.render(true);
        w.render(true);
        // inactive words never draw a cursor, and hits skip the build entirely
        assert_eq!(calls.get(), 2);
        assert!(w.is_cached());
    }

    #[test]
    fn test_active_word_is_never_cached() {
        let mut w = word("cat");
        w.set_active(true);
        w.render(true);
        assert!(!w.is_cached());

        let with_cursor = w.render(true).clone();
        let without_cursor = w.render(false).clone();
        assert_ne!(with_cursor, without_cursor);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut w = word("cat");
        let before = w.render(false).clone();
        assert!(w.is_cached());

        w.type_char('c');
        assert!(!w.is_cached());
        let after = w.render(false).clone();
        assert_ne!(before, after);
        assert_eq!(after.spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_every_mutator_invalidates() {
        let mutators: [fn(&mut Word); 6] = [
            |w: &mut Word| w.type_char('x'),
            |w: &mut Word| {
                w.backspace();
            },
            |w: &mut Word| w.skip(),
            |w: &mut Word| w.reset(),
            |w: &mut Word| w.set_cursor_type(CursorType::Underline),
            |w: &mut Word| w.set_styles(Rc::new(WordStyles::ansi())),
        ];

        for mutate in mutators {
            let mut w = word("cat");
            w.type_char('c');
            w.render(false);
            assert!(w.is_cached());
            mutate(&mut w);
            assert!(!w.is_cached());
        }
    }

    #[test]
    fn test_set_active_only_invalidates_on_change() {
        let mut w = word("cat");
        w.render(false);
        w.set_active(false);
        assert!(w.is_cached());

        w.set_active(true);
        w.set_active(false);
        assert!(!w.is_cached());
    }

    #[test]
    fn test_deactivation_drops_cursor_from_cache() {
        let mut w = word("cat");
        w.set_active(true);
        let active = w.render(true).clone();
        assert!(active.spans[0].style.add_modifier.contains(Modifier::REVERSED));

        w.set_active(false);
        let inactive = w.render(true).clone();
        assert!(!inactive.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_empty_render_is_cached() {
        let mut w = word("");
        assert!(w.render(false).spans.is_empty());
        assert!(w.is_cached());
        assert!(w.render(false).spans.is_empty());
    }

    #[test]
    fn test_style_change_rerenders() {
        let mut w = word("a");
        assert_eq!(w.render(false).spans[0].style.fg, Some(Color::DarkGray));

        let mut changed = (*styles()).clone();
        changed.untyped = Style::default().fg(Color::Blue);
        w.set_styles(Rc::new(changed));
        assert_eq!(w.render(false).spans[0].style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_set_styles_restyles_builtin_cursor() {
        let mut w = word("cat");
        let mut changed = (*styles()).clone();
        changed.cursor = Style::default().fg(Color::Magenta);
        w.set_styles(Rc::new(changed));

        w.set_active(true);
        let line = w.render(true).clone();
        assert_eq!(line.spans[0].content, "c");
        assert_eq!(line.spans[0].style.fg, Some(Color::Magenta));
        assert!(line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_set_styles_keeps_cursor_shape() {
        let mut w = word("cat");
        w.set_cursor_type(CursorType::Underline);
        let mut changed = (*styles()).clone();
        changed.cursor = Style::default().fg(Color::Cyan);
        w.set_styles(Rc::new(changed));

        w.set_active(true);
        let line = w.render(true).clone();
        assert_eq!(line.spans[0].style.fg, Some(Color::Cyan));
        assert!(line.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_set_styles_keeps_custom_cursor() {
        let calls = Rc::new(Cell::new(0));
        let mut w = word("cat");
        w.set_cursor(Box::new(CountingCursor(calls.clone())));
        let mut changed = (*styles()).clone();
        changed.cursor = Style::default().fg(Color::Cyan);
        w.set_styles(Rc::new(changed));

        w.set_active(true);
        let line = w.render(true).clone();
        assert_eq!(calls.get(), 1);
        assert_eq!(line.spans[0].style.fg, Some(Color::Magenta));
    }

    #[test]
    fn test_last_render_carries_display_width() {
        let mut w = word("日本");
        assert!(w.last_render().is_none());

        w.render(false);
        let (line, width) = w.last_render().unwrap();
        assert_eq!(line.spans.len(), 2);
        assert_eq!(width, 4);

        w.type_char('x');
        w.render(false);
        assert_eq!(w.last_render().unwrap().1, 3);
    }

    #[test]
    fn test_underline_cursor() {
        let mut w = word("a");
        w.set_cursor_type(CursorType::Underline);
        w.set_active(true);
        let line = w.render(true).clone();
        assert!(line.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
