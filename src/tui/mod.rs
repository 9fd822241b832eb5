//! Terminal User Interface (TUI) for pomo.
//!
//! One cooperative loop: tick the clock, redraw, wait up to 100ms for a key.
//! Built with ratatui and crossterm.

mod app;
pub mod art;
mod event;
mod terminal;
pub mod theme;
mod ui;

pub use app::{Action, App};
pub use terminal::{check_size, ensure_min_size, TerminalGuard, MIN_SIZE};

use chrono::Utc;
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::PomoError;
use crate::identity::{self, IdentitySource};
use crate::signals::ShutdownFlag;

/// Title used when the identity label is turned off.
const PLAIN_TITLE: &str = "pomodoro";

/// Run the TUI application until the user quits or a signal arrives.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    config: &Config,
    source: &dyn IdentitySource,
    shutdown: &ShutdownFlag,
) -> Result<(), PomoError> {
    let mut guard = TerminalGuard::acquire()?;

    let mut app = App::new(&config.display.art);
    app.clock.start(Utc::now());

    let source = config.display.show_identity.then_some(source);
    run_app(guard.terminal_mut(), &mut app, source, shutdown)
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: Option<&dyn IdentitySource>,
    shutdown: &ShutdownFlag,
) -> Result<(), PomoError> {
    loop {
        if shutdown.is_raised() {
            info!("shutdown signal received");
            break;
        }

        app.clock.tick(Utc::now());

        let title = source.map_or_else(|| PLAIN_TITLE.to_string(), identity::title_label);
        terminal
            .draw(|frame| ui::render(frame, app, &title))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            app.apply(action, Utc::now());
        }

        if app.should_quit {
            info!(
                completed = app.clock.completed_pomodoros(),
                work_seconds = app.clock.total_work_seconds(),
                "quit"
            );
            break;
        }
    }

    Ok(())
}
