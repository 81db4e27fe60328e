// Typing screen layout
//
// ┌ typist ─────────────── Theme ┐
// │ the quick brown fox ...      │
// └──────────────────────────────┘
//  3/9 words · esc quit · tab restart · F2 cursor · F3 theme

use super::app::App;
use crate::typing::WordState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Draw the whole screen
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(app.theme.base_style()), area);

    let [text_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    render_text(f, text_area, app);
    render_status(f, status_area, app);
}

fn render_text(f: &mut Frame, area: Rect, app: &mut App) {
    let title_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" typist ", title_style))
        .title_top(Line::from(format!(" {} ", app.theme.name)).right_aligned());

    let inner = block.inner(area);
    let show_cursor = app.show_cursor();
    let lines = app.session.render_lines(inner.width, show_cursor);

    let text = Paragraph::new(lines)
        .style(app.theme.base_style())
        .block(block);
    f.render_widget(text, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(app.theme.muted);

    let mut spans = Vec::new();
    if app.is_finished() {
        spans.push(Span::styled(
            " done ",
            Style::default()
                .fg(app.theme.input)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("· ", muted));
    }
    let words = app.session.words();
    let total = words.iter().filter(|w| !w.is_space()).count();
    let done = words
        .iter()
        .filter(|w| !w.is_space() && !w.is_active() && w.state() != WordState::Untyped)
        .count();
    let done = if app.is_finished() { total } else { done };

    spans.push(Span::styled(
        format!(
            " {}/{} words · esc quit · tab restart · F2 cursor ({}) · F3 theme",
            done,
            total,
            app.cursor_type().as_str()
        ),
        muted,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
