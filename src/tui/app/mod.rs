//! Terminal lifecycle and the event loop driving the [`Host`].
//!
//! [`App`] owns the ratatui terminal. Raw mode, the alternate screen and
//! mouse capture are switched on in [`App::new`] and restored by a guard
//! when the app is dropped, including on early returns and panics that
//! unwind through the loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, error};

use super::host::Host;

/// Restores the terminal when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
            error!(?err, "failed to leave alternate screen");
        }
    }
}

/// A ratatui terminal in raw mode on the alternate screen.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Declared last so the terminal is dropped before the screen is restored
    _guard: TerminalGuard,
}

impl App {
    /// Take over the terminal.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to build terminal backend")?;
        terminal.hide_cursor().ok();
        debug!("terminal initialized");
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next terminal event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Drive `host` until it asks to quit.
///
/// Every iteration polls the host's timers, redraws, then waits at most
/// `tick_rate` for input, so animations keep moving while idle.
pub fn run(host: &mut Host, tick_rate: Duration) -> Result<()> {
    let mut app = App::new()?;
    while !host.should_quit() {
        host.tick();
        app.draw(|frame| host.render(frame))?;
        if let Some(event) = app.next_event(tick_rate)? {
            host.handle_event(event);
        }
    }
    debug!("event loop finished");
    Ok(())
}
