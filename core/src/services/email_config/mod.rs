//! Email provider configuration validation
//!
//! A standalone check, run before deployment or on demand, confirming that
//! the backend variables are set and that the selected email provider has
//! every credential it needs. Reads configuration only; no network calls.

mod types;
mod validator;

pub use types::{CheckedVariable, ValidationFailure, ValidationReport};
pub use validator::validate_email_config;
