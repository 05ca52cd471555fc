//! Configuration file support for overlay-picker.
//!
//! Configuration is loaded from `~/.config/overlay-picker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/overlay-picker/config.toml
//! cancel_title = "Abbrechen"
//! done_title = "Fertig"
//! animation_ms = 200
//! visible_rows = 7
//! dim_backdrop = true
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PickerError, Result};

/// Environment variable overriding `animation_ms`
pub const ANIMATION_ENV: &str = "OVERLAY_PICKER_ANIMATION_MS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Title of the toolbar's dismiss button
    pub cancel_title: String,

    /// Title of the toolbar's confirm button
    pub done_title: String,

    /// Duration of the slide in/out transition in milliseconds (0 disables it)
    pub animation_ms: u64,

    /// Number of wheel rows shown by a selector
    pub visible_rows: u16,

    /// Whether the content behind the overlay is dimmed
    pub dim_backdrop: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cancel_title: "Cancel".to_string(),
            done_title: "Done".to_string(),
            animation_ms: 250,
            visible_rows: 5,
            dim_backdrop: true,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration, reporting read and parse failures.
    pub fn try_load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|source| {
            PickerError::ConfigRead {
                path: config_path.clone(),
                source,
            }
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("overlay-picker")
    }

    /// Merge with environment and CLI overrides.
    ///
    /// CLI arguments take precedence over the environment, which takes
    /// precedence over config file values.
    pub fn with_overrides(mut self, animation_ms: Option<u64>) -> Self {
        if let Some(ms) = std::env::var(ANIMATION_ENV)
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.animation_ms = ms;
        }
        if let Some(ms) = animation_ms {
            self.animation_ms = ms;
        }
        self
    }

    /// Transition duration.
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Visible wheel rows, forced odd and at least 3 so one row sits centered.
    pub fn visible_rows(&self) -> u16 {
        let rows = self.visible_rows.max(3);
        if rows % 2 == 0 { rows + 1 } else { rows }
    }
}
