// TUI module - Terminal User Interface
//
// This module manages the typing screen using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, blink ticks)
// - Rendering the UI

pub mod app;
pub mod ui;

use crate::config::Config;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the typing screen until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// afterwards, also when the loop fails.
pub fn run(config: &Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut app = App::with_config(config);

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    if let Err(e) = &result {
        tracing::error!("Typing screen exited with error: {:#}", e);
    }
    result
}

/// Main event loop
///
/// Draws a frame, waits up to one tick for a key, then advances the cursor
/// blink. Only the active word is rebuilt per frame; the rest come from the
/// word render cache.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(TICK_RATE).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                app.handle_key(key);
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
