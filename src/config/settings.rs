//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. The file is optional and
//! never written; interval durations are fixed and not part of it.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Display settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name of the art shown at startup.
    #[serde(default = "default_art")]
    pub art: String,
    /// Show `user@host` as the info box title.
    #[serde(default = "default_true")]
    pub show_identity: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter used when `POMO_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_art() -> String {
    "bunny".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "off".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            art: default_art(),
            show_identity: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
