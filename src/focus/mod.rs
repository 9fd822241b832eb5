//! Pomodoro session tracking.
//!
//! - The work/break state machine with elapsed-time bookkeeping
//! - Countdown, duration and progress bar formatting

pub mod clock;
pub mod format;

pub use clock::{
    Phase, SessionClock, LONG_BREAK_SECONDS, SHORT_BREAK_SECONDS, TOTAL_SESSIONS, WORK_SECONDS,
};
pub use format::{format_clock, format_hours_minutes, progress_bar};
