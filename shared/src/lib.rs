//! Shared utilities and common types for the MailProbe server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the environment lookup abstraction
//! - Configuration error type
//! - Wire response structures for the dispatch endpoint
//! - Utility functions (email masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BackendConfig, CorsConfig, EmailProvider, EnvSource, Environment, ProcessEnv,
    ServerConfig,
};
pub use errors::ConfigError;
pub use types::{DispatchResponse, HealthResponse};
pub use utils::mask_email;
