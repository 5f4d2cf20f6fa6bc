//! Shared error types

use thiserror::Error;

/// Errors raised while turning environment values into configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set but its value could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    pub fn invalid(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }
}
