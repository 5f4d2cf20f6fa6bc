//! In-memory backend for tests and local runs

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::domain::{EmailDispatchData, EmailDispatchPayload, VerificationCode};
use crate::errors::BackendError;

use super::traits::VerificationBackend;

/// Backend double with scripted results and recorded calls
pub struct MockBackend {
    configured: bool,
    generate_result: Result<VerificationCode, BackendError>,
    dispatch_result: Result<EmailDispatchData, BackendError>,
    pub generated_for: Mutex<Vec<String>>,
    pub dispatched: Mutex<Vec<EmailDispatchPayload>>,
}

impl MockBackend {
    /// Configured backend that generates `code` and echoes it back on dispatch
    pub fn succeeding(code: &str) -> Self {
        Self {
            configured: true,
            generate_result: Ok(VerificationCode::new(code)),
            dispatch_result: Ok(EmailDispatchData {
                code: Some(serde_json::Value::from(code)),
            }),
            generated_for: Mutex::new(Vec::new()),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Backend whose URL or key is missing
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::succeeding("000000")
        }
    }

    pub fn with_generate_result(mut self, result: Result<VerificationCode, BackendError>) -> Self {
        self.generate_result = result;
        self
    }

    pub fn with_dispatch_result(mut self, result: Result<EmailDispatchData, BackendError>) -> Self {
        self.dispatch_result = result;
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generated_for.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn dispatch_calls(&self) -> usize {
        self.dispatched.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn total_calls(&self) -> usize {
        self.generate_calls() + self.dispatch_calls()
    }
}

#[async_trait]
impl VerificationBackend for MockBackend {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_code(&self, email: &str) -> Result<VerificationCode, BackendError> {
        self.generated_for.lock().unwrap_or_else(PoisonError::into_inner).push(email.to_string());
        self.generate_result.clone()
    }

    async fn send_verification_email(
        &self,
        payload: &EmailDispatchPayload,
    ) -> Result<EmailDispatchData, BackendError> {
        self.dispatched.lock().unwrap_or_else(PoisonError::into_inner).push(payload.clone());
        self.dispatch_result.clone()
    }
}
