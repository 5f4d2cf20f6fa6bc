//! Verification dispatch module
//!
//! This module provides the two-stage dispatch flow used to check the
//! email verification pipeline end to end:
//! - Backend configuration check
//! - Code generation through the backend
//! - Email dispatch through the backend's remote function
//! - Normalized failure reporting per stage

mod config;
pub mod mock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::DispatchServiceConfig;
pub use service::DispatchService;
pub use traits::VerificationBackend;
