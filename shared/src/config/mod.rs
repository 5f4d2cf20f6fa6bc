//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `backend` - Backend service (Supabase) URL, key and request timeout
//! - `email` - Email provider selection and required credential variables
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//!
//! All values are read through [`EnvSource`] so that configuration is
//! loaded once and passed around as an immutable value.

pub mod backend;
pub mod email;
pub mod environment;
pub mod server;

use std::collections::HashMap;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use backend::BackendConfig;
pub use email::EmailProvider;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Read access to a set of environment variables
pub trait EnvSource {
    /// Raw value of a variable, `None` when unset
    fn var(&self, name: &str) -> Option<String>;

    /// Value of a variable, treating empty and whitespace-only values as unset
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.trim().is_empty())
    }

    /// Whether a variable is set to a non-empty value
    fn is_present(&self, name: &str) -> bool {
        self.get_non_empty(name).is_some()
    }
}

/// The variables of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from any variable source
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let environment = Environment::from_source(env);

        Ok(Self {
            environment,
            server: ServerConfig::from_source(env)?,
            backend: BackendConfig::from_source(env)?,
            cors: CorsConfig::from_source(env, environment)?,
        })
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset
pub(crate) fn parse_or<T: std::str::FromStr>(
    env: &impl EnvSource,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match env.get_non_empty(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(name, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn env_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
