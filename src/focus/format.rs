//! Countdown and duration formatting.

/// Format seconds as MM:SS.
#[must_use]
pub fn format_clock(seconds: i64) -> String {
    let total_seconds = seconds.max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a cumulative duration as `Hh MMm`.
#[must_use]
pub fn format_hours_minutes(seconds: i64) -> String {
    let total_seconds = seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}h {minutes:02}m")
}

/// Render a progress bar of exactly `width` cells.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
