//! Backend service configuration

use serde::{Deserialize, Serialize};

use super::{parse_or, EnvSource};
use crate::errors::ConfigError;

/// Backend base URL variable
pub const BACKEND_URL_VAR: &str = "SUPABASE_URL";
/// Backend API key variable
pub const BACKEND_KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Per-request timeout variable, in seconds
pub const BACKEND_TIMEOUT_VAR: &str = "BACKEND_TIMEOUT_SECS";

/// Connection settings for the backend service.
///
/// Missing variables load as empty strings; callers check
/// [`BackendConfig::is_complete`] before making any call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Variables that must both be set for the backend to be usable
    pub const REQUIRED_VARIABLES: [&'static str; 2] = [BACKEND_URL_VAR, BACKEND_KEY_VAR];

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env.get_non_empty(BACKEND_URL_VAR).unwrap_or_default(),
            api_key: env.get_non_empty(BACKEND_KEY_VAR).unwrap_or_default(),
            timeout_secs: parse_or(env, BACKEND_TIMEOUT_VAR, default_timeout_secs())?,
        })
    }

    /// Both the URL and the key are non-empty
    pub fn is_complete(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Base URL without a trailing slash
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

fn default_timeout_secs() -> u64 {
    30
}
