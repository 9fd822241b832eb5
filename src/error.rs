//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running the timer.
#[derive(Debug, Error)]
pub enum PomoError {
    /// The terminal is below the minimum supported size.
    #[error("Terminal window too small. Please resize to at least {min_cols}x{min_rows} characters.")]
    TerminalTooSmall {
        /// Current column count.
        cols: u16,
        /// Current row count.
        rows: u16,
        /// Required column count.
        min_cols: u16,
        /// Required row count.
        min_rows: u16,
    },

    /// Setting up, drawing to, or reading from the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
