//! Error types for styles and configuration

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingError {
    /// Invalid value for a setting
    #[error("Invalid value for setting '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Configuration file could not be read
    #[error("Cannot read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl SettingError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type SettingResult<T> = Result<T, SettingError>;
