//! Error handling for the configuration toolkit
//!
//! This module provides comprehensive error types for all configuration operations.

use std::fmt;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Comprehensive error types for configuration operations
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File I/O errors
    Io(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Project file format not recognized
    UnsupportedFormat(String),
    /// Requested network profile does not exist
    UnknownNetwork(String),
    /// Refusing to overwrite an existing project file
    FileExists(String),
    /// Authoring defects found by the lint pass
    Lint { issues: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConfigError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ConfigError::UnsupportedFormat(path) => {
                write!(f, "Unsupported project file format: {path}")
            }
            ConfigError::UnknownNetwork(name) => write!(f, "Unknown network profile: {name}"),
            ConfigError::FileExists(path) => {
                write!(f, "Project file already exists: {path}")
            }
            ConfigError::Lint { issues } => {
                write!(f, "Configuration check failed with {issues} issue(s)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}
