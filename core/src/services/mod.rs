//! Business services containing the diagnostic use cases.

pub mod dispatch;
pub mod email_config;

// Re-export commonly used types
pub use dispatch::{DispatchService, DispatchServiceConfig, VerificationBackend};
pub use email_config::{validate_email_config, CheckedVariable, ValidationFailure, ValidationReport};
