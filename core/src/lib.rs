//! # MailProbe Core
//!
//! Core logic for diagnosing the email verification delivery pipeline.
//! This crate contains the domain types, the verification dispatch flow,
//! the backend collaborator trait, and the email provider configuration
//! validator. It performs no I/O of its own.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
