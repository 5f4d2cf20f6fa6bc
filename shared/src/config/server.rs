//! Server configuration module

use serde::{Deserialize, Serialize};
use url::Url;

use super::{parse_or, EnvSource, Environment};
use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Read `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: env.get_non_empty("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or(env, "SERVER_PORT", defaults.port)?,
            workers: parse_or(env, "SERVER_WORKERS", defaults.workers)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Accept any origin (development and staging)
    pub allow_any_origin: bool,

    /// Allowed origins when `allow_any_origin` is off
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Read `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`.
    /// Only production restricts origins.
    ///
    /// Each origin must be a serialized `http`/`https` origin such as
    /// `https://app.example.com`; wildcards, paths and trailing slashes
    /// are rejected.
    pub fn from_source(env: &impl EnvSource, environment: Environment) -> Result<Self, ConfigError> {
        let allowed_origins = env
            .get_non_empty(ALLOWED_ORIGINS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(parse_origin)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            allow_any_origin: !environment.is_production(),
            allowed_origins,
            max_age: parse_or(env, "CORS_MAX_AGE", default_max_age())?,
        })
    }
}

fn default_max_age() -> usize {
    3600
}

const ALLOWED_ORIGINS_VAR: &str = "ALLOWED_ORIGINS";

fn parse_origin(origin: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::invalid(ALLOWED_ORIGINS_VAR, origin);
    let url = Url::parse(origin).map_err(|_| invalid())?;

    match url.scheme() {
        "http" | "https" if url.origin().ascii_serialization() == origin => Ok(origin.to_string()),
        _ => Err(invalid()),
    }
}
