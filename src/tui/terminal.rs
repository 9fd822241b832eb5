//! Scoped ownership of the terminal's raw mode and alternate screen.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::PomoError;

/// Smallest supported terminal: columns, rows.
pub const MIN_SIZE: (u16, u16) = (80, 24);

/// Fail unless the terminal is at least [`MIN_SIZE`].
///
/// # Errors
///
/// Returns `TerminalTooSmall` for a small terminal, or a terminal error if
/// the size cannot be queried.
pub fn check_size() -> Result<(), PomoError> {
    let (cols, rows) = crossterm::terminal::size()
        .map_err(|e| PomoError::Terminal(format!("Failed to query terminal size: {e}")))?;
    ensure_min_size(cols, rows)
}

/// Compare a terminal size against [`MIN_SIZE`].
///
/// # Errors
///
/// Returns `TerminalTooSmall` if either dimension is below the minimum.
pub fn ensure_min_size(cols: u16, rows: u16) -> Result<(), PomoError> {
    let (min_cols, min_rows) = MIN_SIZE;
    if cols < min_cols || rows < min_rows {
        return Err(PomoError::TerminalTooSmall {
            cols,
            rows,
            min_cols,
            min_rows,
        });
    }
    Ok(())
}

/// A ratatui terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, on every exit path including
/// errors and panics that unwind.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn acquire() -> Result<Self, PomoError> {
        enable_raw_mode()
            .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(PomoError::Terminal(format!("Failed to setup terminal: {e}")));
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                terminal.hide_cursor().ok();
                debug!("terminal acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                disable_raw_mode().ok();
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                Err(PomoError::Terminal(format!("Failed to create terminal: {e}")))
            }
        }
    }

    /// The wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
        debug!("terminal restored");
    }
}
