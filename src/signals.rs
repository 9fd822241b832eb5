//! Shutdown signal handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::debug;

use crate::error::PomoError;

/// Flag raised by SIGINT or SIGTERM, polled by the render loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    /// Register the flag for SIGINT and SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler cannot be installed.
    pub fn register() -> Result<Self, PomoError> {
        let flag = Self::default();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&flag.0))?;
            debug!(signal, "shutdown handler registered");
        }
        Ok(flag)
    }

    /// Whether a shutdown was requested.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Request a shutdown.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_lowered() {
        assert!(!ShutdownFlag::default().is_raised());
    }

    #[test]
    fn test_raise_is_shared_between_clones() {
        let flag = ShutdownFlag::default();
        let other = flag.clone();
        other.raise();
        assert!(flag.is_raised());
    }
}
