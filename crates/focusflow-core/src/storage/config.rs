//! TOML-based application configuration.
//!
//! Stores user preferences for the focus session length and the reminder
//! poll. Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Focus-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Session length in seconds.
    #[serde(default = "default_focus_duration_secs")]
    pub duration_secs: u64,
}

/// Reminder poll configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Trailing window in which a past trigger still surfaces.
    #[serde(default = "default_reminder_window_secs")]
    pub window_secs: u64,
    /// Interval between poll passes.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub focus: FocusConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

fn default_focus_duration_secs() -> u64 {
    1500
}
fn default_reminder_window_secs() -> u64 {
    60
}
fn default_poll_interval_secs() -> u64 {
    10
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_focus_duration_secs(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window_secs: default_reminder_window_secs(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus: FocusConfig::default(),
            reminder: ReminderConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, writing defaults on first use.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}
