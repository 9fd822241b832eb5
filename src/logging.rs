//! Tracing setup.
//!
//! The screen belongs to the TUI, so events go to stderr without colour and
//! are off unless asked for: `POMO_LOG=debug pomo 2>pomo.log`.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "POMO_LOG";

/// Build the filter from `POMO_LOG`, falling back to `default_filter`.
///
/// # Errors
///
/// Returns an error if the fallback directive does not parse.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}")),
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = build_filter(default_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
