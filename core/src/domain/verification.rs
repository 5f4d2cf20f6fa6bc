//! Verification request, code and dispatch records

use mp_shared::DispatchResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DispatchError, DispatchResult};

/// Remote function that delivers the verification email
pub const VERIFICATION_EMAIL_FUNCTION: &str = "send-verification-email";

/// `type` field sent with every dispatch payload
pub const VERIFICATION_EMAIL_TYPE: &str = "verification";

/// Message returned when the email was accepted for delivery
pub const SUCCESS_MESSAGE: &str = "Test email sent successfully";

/// A request to send a verification code to one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    email: String,
}

impl VerificationRequest {
    /// Build a request, rejecting a missing or blank address
    pub fn new(email: Option<&str>) -> DispatchResult<Self> {
        match email {
            Some(email) if !email.trim().is_empty() => Ok(Self {
                email: email.to_string(),
            }),
            _ => Err(DispatchError::InputValidation),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Opaque code produced by the backend.
///
/// The value is never inspected; it is carried as received and handed to
/// the dispatch call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCode(Value);

impl VerificationCode {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl std::fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Body of the remote email-dispatch call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDispatchPayload {
    pub email: String,
    pub code: VerificationCode,
    #[serde(rename = "type")]
    pub kind: String,
}

impl EmailDispatchPayload {
    /// Payload for a verification email; takes ownership of the code
    pub fn verification(email: impl Into<String>, code: VerificationCode) -> Self {
        Self {
            email: email.into(),
            code,
            kind: VERIFICATION_EMAIL_TYPE.to_string(),
        }
    }
}

/// Data returned by a successful dispatch call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailDispatchData {
    #[serde(default)]
    pub code: Option<Value>,
}

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub message: String,
    /// Code echoed back by the dispatch call, only kept when diagnostics are allowed
    pub code: Option<Value>,
}

impl DispatchOutcome {
    pub fn to_response(&self) -> DispatchResponse {
        DispatchResponse::success(self.message.clone(), self.code.clone())
    }
}
