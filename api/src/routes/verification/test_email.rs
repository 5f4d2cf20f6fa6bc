use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use futures_util::FutureExt;
use validator::Validate;

use mp_core::domain::{DispatchOutcome, VerificationRequest};
use mp_core::errors::{DispatchError, DispatchResult, DispatchStage};
use mp_core::services::{DispatchService, VerificationBackend};
use mp_shared::mask_email;

use crate::dto::TestEmailRequest;
use crate::handlers::{error_response, panic_message};

/// Application state that holds shared services
pub struct AppState<B: VerificationBackend> {
    pub dispatch_service: Arc<DispatchService<B>>,
}

impl<B: VerificationBackend> AppState<B> {
    pub fn new(dispatch_service: Arc<DispatchService<B>>) -> Self {
        Self { dispatch_service }
    }
}

/// Handler for POST /api/v1/verification/test-email
///
/// Also mounted at POST /functions/v1/test-email-verification for clients
/// that still call the edge function path.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "Test email sent successfully", "code": "123456" }
/// ```
/// `code` is only present outside production.
///
/// ## Errors
/// - 400 `{ "error": "Email is required" }`
/// - 500 `{ "error": "...", "details": "..." }` for configuration, backend
///   and unexpected failures
pub async fn test_email_verification<B>(
    state: web::Data<AppState<B>>,
    body: web::Bytes,
) -> HttpResponse
where
    B: VerificationBackend + 'static,
{
    let result = AssertUnwindSafe(dispatch(&state, &body))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            let details = panic_message(payload.as_ref()).unwrap_or_default();
            Err(DispatchError::unexpected(DispatchStage::Received, details))
        });

    match result {
        Ok(outcome) => {
            tracing::info!(event = "test_email_sent", "Test email dispatched");
            HttpResponse::Ok().json(outcome.to_response())
        }
        Err(error) => {
            match &error {
                DispatchError::MalformedRequest { .. } | DispatchError::Unexpected { .. } => {
                    tracing::error!(
                        stage = %error.stage(),
                        error = %error,
                        event = "test_email_failed",
                        "Test email request failed"
                    );
                }
                _ => tracing::warn!(
                    stage = %error.stage(),
                    error = %error,
                    event = "test_email_rejected",
                    "Test email request rejected"
                ),
            }
            error_response(&error)
        }
    }
}

async fn dispatch<B>(state: &AppState<B>, body: &[u8]) -> DispatchResult<DispatchOutcome>
where
    B: VerificationBackend + 'static,
{
    let request: TestEmailRequest =
        serde_json::from_slice(body).map_err(|e| DispatchError::MalformedRequest {
            details: e.to_string(),
        })?;

    if request.validate().is_err() {
        return Err(DispatchError::InputValidation);
    }

    let request = VerificationRequest::new(request.email.as_deref())?;
    tracing::info!(
        email = %mask_email(request.email()),
        event = "test_email_requested",
        "Processing test email request"
    );

    state.dispatch_service.dispatch_verification(&request).await
}
