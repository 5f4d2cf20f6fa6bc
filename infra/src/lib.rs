//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for MailProbe. It provides
//! the concrete backend client used by the dispatch flow and loads the
//! application configuration from the process environment.
//!
//! ## Architecture
//!
//! - **Backend**: Supabase client (PostgREST RPC and Edge Functions) over reqwest
//! - **Config**: `.env` loading and `AppConfig` construction

// Re-export core types for convenience
pub use mp_core::errors::*;

/// Backend module - Supabase client implementing `VerificationBackend`
pub mod backend;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration loading
    //!
    //! Handles `.env` files and builds the immutable `AppConfig` that is
    //! passed explicitly to each component.

    use std::path::{Path, PathBuf};

    use mp_shared::AppConfig;

    use crate::InfrastructureError;

    /// Where `.env` was loaded from, `None` when there is no such file
    pub type EnvFileOutcome = Result<Option<PathBuf>, InfrastructureError>;

    /// Read configuration from the process environment
    pub fn load_config() -> Result<AppConfig, InfrastructureError> {
        Ok(AppConfig::from_env()?)
    }

    /// Load the nearest `.env` into the process environment.
    ///
    /// Runs before the tracing subscriber exists so that `RUST_LOG` may come
    /// from the file; pass the outcome to [`log_env_file`] afterwards.
    pub fn load_env_file() -> EnvFileOutcome {
        found(dotenvy::dotenv())
    }

    /// Load a specific env file into the process environment
    pub fn load_env_file_from(path: &Path) -> EnvFileOutcome {
        found(dotenvy::from_path(path).map(|()| path.to_path_buf()))
    }

    /// Report the outcome of loading `.env`
    pub fn log_env_file(outcome: &EnvFileOutcome) {
        match outcome {
            Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
            Ok(None) => tracing::debug!("No .env file found"),
            Err(e) => tracing::warn!("Failed to read .env file: {}", e),
        }
    }

    fn found(result: Result<PathBuf, dotenvy::Error>) -> EnvFileOutcome {
        match result {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_missing_env_file_is_not_an_error() {
            let path = std::env::temp_dir().join("mailprobe-no-such-dir/.env");

            assert!(matches!(load_env_file_from(&path), Ok(None)));
        }

        #[test]
        fn test_unreadable_env_file_is_reported() {
            let path = std::env::temp_dir()
                .join(format!("mailprobe-malformed-{}.env", std::process::id()));
            std::fs::write(&path, "this is not an env file\n").unwrap();

            let outcome = load_env_file_from(&path);
            std::fs::remove_file(&path).unwrap();

            assert!(matches!(outcome, Err(InfrastructureError::EnvFile(_))));
        }
    }
}

pub use backend::SupabaseBackend;
pub use config::load_config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] mp_shared::ConfigError),

    /// `.env` exists but could not be read or parsed
    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
