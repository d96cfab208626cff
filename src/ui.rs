//! Terminal session for the reader: set up the screen, pump events into the page, redraw on change.

use crate::config::AppConfig;
use crate::page::{Page, PageFlow};
use crate::terminal_restore::TerminalRestoreGuard;
use anyhow::{Context, Result};
use crossterm::event;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configure the terminal, run the page until it asks to quit, and restore the terminal.
///
/// # Errors
///
/// Returns an error if terminal initialization, event polling, or drawing fails.
pub fn run_reader(page: &mut Page, config: &AppConfig) -> Result<()> {
    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard
        .enable_raw_mode()
        .context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    terminal_guard
        .enter_alt_screen(&mut stdout)
        .context("failed to enter alternate screen")?;
    if config.mouse_enabled() {
        terminal_guard
            .enable_mouse_capture(&mut stdout)
            .context("failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
    tracing::info!(mouse = config.mouse_enabled(), "reader session started");

    let result = event_loop(&mut terminal, page);

    drop(terminal);
    terminal_guard.restore();
    tracing::info!(ok = result.is_ok(), "reader session ended");

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, page: &mut Page) -> Result<()> {
    let size = terminal.size().context("failed to query terminal size")?;
    page.set_viewport(Rect::new(0, 0, size.width, size.height));
    terminal
        .draw(|frame| page.draw(frame))
        .context("failed to draw page")?;

    loop {
        if event::poll(POLL_INTERVAL).context("failed to poll terminal events")? {
            let event = event::read().context("failed to read terminal event")?;
            if page.handle_event(event) == PageFlow::Quit {
                break;
            }
        }

        if page.needs_redraw() {
            terminal
                .draw(|frame| page.draw(frame))
                .context("failed to draw page")?;
        }
    }
    Ok(())
}
