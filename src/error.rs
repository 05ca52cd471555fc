//! Error types for overlay-picker
//!
//! Picker operations themselves are total. These errors cover loading the
//! configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for overlay-picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_message_names_path() {
        let err = PickerError::ConfigRead {
            path: PathBuf::from("/tmp/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/config.toml"));
        assert!(message.contains("denied"));
    }
}
