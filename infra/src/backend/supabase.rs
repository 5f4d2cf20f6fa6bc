//! Supabase Backend Implementation
//!
//! Implements `VerificationBackend` against a Supabase project:
//! - Code generation through a PostgREST RPC call
//! - Email dispatch through an Edge Function invocation
//!
//! A non-2xx answer is a remote error carrying the backend's own message.
//! Connection failures, timeouts and undecodable bodies are transport errors.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use mp_core::domain::{
    EmailDispatchData, EmailDispatchPayload, VerificationCode, VERIFICATION_EMAIL_FUNCTION,
};
use mp_core::errors::BackendError;
use mp_core::services::VerificationBackend;
use mp_shared::{mask_email, BackendConfig};

use crate::InfrastructureError;

/// Database function that generates and stores a code
pub const GENERATE_CODE_RPC: &str = "generate_verification_code";

/// Message used when an Edge Function fails without an error body
const FUNCTION_HTTP_ERROR: &str = "Edge Function returned a non-2xx status code";

/// Supabase backend client
pub struct SupabaseBackend {
    client: Client,
    config: BackendConfig,
}

impl SupabaseBackend {
    /// Create a client; the configuration may be incomplete, see `is_configured`
    pub fn new(config: BackendConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.config.trimmed_base_url(), function)
    }

    fn function_url(&self, function: &str) -> String {
        format!("{}/functions/v1/{}", self.config.trimmed_base_url(), function)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }
}

#[async_trait]
impl VerificationBackend for SupabaseBackend {
    fn is_configured(&self) -> bool {
        self.config.is_complete()
    }

    async fn generate_code(&self, email: &str) -> Result<VerificationCode, BackendError> {
        debug!("Calling {} for {}", GENERATE_CODE_RPC, mask_email(email));

        let response = self
            .authorized(self.client.post(self.rpc_url(GENERATE_CODE_RPC)))
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let message = error_message(response, &["message", "error", "msg"])
                .await
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(BackendError::remote(message));
        }

        let body = response.bytes().await.map_err(transport)?;
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            BackendError::transport(format!("Malformed code generation response: {}", e))
        })?;

        Ok(VerificationCode::new(value))
    }

    async fn send_verification_email(
        &self,
        payload: &EmailDispatchPayload,
    ) -> Result<EmailDispatchData, BackendError> {
        debug!(
            "Invoking {} for {}",
            VERIFICATION_EMAIL_FUNCTION,
            mask_email(&payload.email)
        );

        let response = self
            .authorized(self.client.post(self.function_url(VERIFICATION_EMAIL_FUNCTION)))
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let message = error_message(response, &["error", "message"])
                .await
                .unwrap_or_else(|| FUNCTION_HTTP_ERROR.to_string());
            return Err(BackendError::remote(message));
        }

        let body = response.bytes().await.map_err(transport)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(EmailDispatchData::default());
        }

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            BackendError::transport(format!("Malformed email dispatch response: {}", e))
        })?;

        Ok(EmailDispatchData {
            code: value.get("code").filter(|code| !code.is_null()).cloned(),
        })
    }
}

fn transport(error: reqwest::Error) -> BackendError {
    BackendError::transport(error.to_string())
}

/// First non-empty message found under `keys` in a JSON error body.
/// A key may hold a string or an object with its own `message`.
async fn error_message(response: Response, keys: &[&str]) -> Option<String> {
    let body: Value = response.json().await.ok()?;

    keys.iter().find_map(|key| {
        let field = body.get(*key)?;
        let text = match field {
            Value::String(s) => s.as_str(),
            Value::Object(_) => field.get("message")?.as_str()?,
            _ => return None,
        };
        (!text.trim().is_empty()).then(|| text.to_string())
    })
}
