//! Trait for the backend collaborator

use async_trait::async_trait;

use crate::domain::{EmailDispatchData, EmailDispatchPayload, VerificationCode};
use crate::errors::BackendError;

/// Backend service providing code generation and remote email dispatch
#[async_trait]
pub trait VerificationBackend: Send + Sync {
    /// Whether the connection settings are complete enough to make calls
    fn is_configured(&self) -> bool;

    /// Ask the backend for a fresh verification code for `email`
    async fn generate_code(&self, email: &str) -> Result<VerificationCode, BackendError>;

    /// Invoke the remote email-sending function
    async fn send_verification_email(
        &self,
        payload: &EmailDispatchPayload,
    ) -> Result<EmailDispatchData, BackendError>;
}
