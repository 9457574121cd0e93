//! Configuration loading errors.

use thiserror::Error;

/// Failure to read or parse a configuration file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
