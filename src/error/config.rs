//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving [`crate::config::IhsanConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file '{}': {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// Config file is not valid TOML for the expected shape.
    #[error("Invalid config file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A field or environment variable holds an unusable value.
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    /// Could not determine home directory.
    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::NoHomeDirectory => "E_CFG_NO_HOME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "IHSAN_DAY_BOUNDARY".to_string(),
            value: "mars".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value 'mars' for IHSAN_DAY_BOUNDARY");
        assert_eq!(err.error_code(), "E_CFG_VALUE");
    }

    #[test]
    fn test_parse_display_includes_path() {
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/config.toml"),
            message: "expected table".to_string(),
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
    }
}
