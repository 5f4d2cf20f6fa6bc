//! Verification dispatch service implementation

use std::sync::Arc;

use mp_shared::mask_email;

use crate::domain::{DispatchOutcome, EmailDispatchPayload, VerificationRequest, SUCCESS_MESSAGE};
use crate::errors::{BackendError, DispatchError, DispatchResult, DispatchStage};

use super::config::DispatchServiceConfig;
use super::traits::VerificationBackend;

/// Runs one verification dispatch per call against a backend
pub struct DispatchService<B: VerificationBackend> {
    backend: Arc<B>,
    config: DispatchServiceConfig,
}

impl<B: VerificationBackend> DispatchService<B> {
    pub fn new(backend: Arc<B>, config: DispatchServiceConfig) -> Self {
        Self { backend, config }
    }

    pub fn is_backend_configured(&self) -> bool {
        self.backend.is_configured()
    }

    /// Generate a code for the requested address and send it.
    ///
    /// Steps run strictly in order and stop at the first failure:
    /// 1. Check the backend configuration
    /// 2. Generate a code
    /// 3. Dispatch the verification email with that code
    ///
    /// Nothing is retried. Generation always completes before dispatch
    /// starts, since dispatch needs its output.
    pub async fn dispatch_verification(
        &self,
        request: &VerificationRequest,
    ) -> DispatchResult<DispatchOutcome> {
        let masked = mask_email(request.email());

        if !self.backend.is_configured() {
            tracing::warn!(
                email = %masked,
                event = "backend_config_missing",
                "Backend URL or key not configured"
            );
            return Err(DispatchError::ConfigurationMissing);
        }

        let code = self
            .backend
            .generate_code(request.email())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "code_generation_failed",
                    "Error generating verification code"
                );
                match e {
                    BackendError::Remote { message } => DispatchError::CodeGeneration { message },
                    BackendError::Transport { message } => {
                        DispatchError::unexpected(DispatchStage::GeneratingCode, message)
                    }
                }
            })?;

        tracing::debug!(email = %masked, event = "code_generated", "Verification code generated");

        let payload = EmailDispatchPayload::verification(request.email(), code);
        let data = self
            .backend
            .send_verification_email(&payload)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "email_dispatch_failed",
                    "Error sending verification email"
                );
                match e {
                    BackendError::Remote { message } => {
                        DispatchError::EmailDispatch { details: message }
                    }
                    BackendError::Transport { message } => {
                        DispatchError::unexpected(DispatchStage::DispatchingEmail, message)
                    }
                }
            })?;

        tracing::info!(email = %masked, event = "email_dispatched", "Verification email sent");

        Ok(DispatchOutcome {
            message: SUCCESS_MESSAGE.to_string(),
            code: data.code.filter(|_| self.config.expose_code),
        })
    }
}
