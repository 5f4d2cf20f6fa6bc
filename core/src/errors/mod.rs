//! Error types for the dispatch flow and its backend collaborator.

use mp_shared::DispatchResponse;
use thiserror::Error;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const CONFIGURATION_MISSING: &str = "Supabase configuration missing";
pub const SEND_FAILED: &str = "Failed to send email";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Stage of the per-request flow at which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStage {
    /// Body parsing, or anywhere not attributable to a later stage
    Received,
    ValidatingInput,
    CheckingConfig,
    GeneratingCode,
    DispatchingEmail,
}

impl std::fmt::Display for DispatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DispatchStage::Received => "received",
            DispatchStage::ValidatingInput => "validating_input",
            DispatchStage::CheckingConfig => "checking_config",
            DispatchStage::GeneratingCode => "generating_code",
            DispatchStage::DispatchingEmail => "dispatching_email",
        };
        f.write_str(name)
    }
}

/// Terminal failure of a verification dispatch.
///
/// Exactly one variant is produced per failed request; the wire text is
/// rendered separately through [`DispatchError::to_response`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Email is required")]
    InputValidation,

    #[error("Supabase configuration missing")]
    ConfigurationMissing,

    /// Body could not be read as `{ "email": string }`
    #[error("Malformed request body: {details}")]
    MalformedRequest { details: String },

    /// The backend rejected code generation; message passed through verbatim
    #[error("{message}")]
    CodeGeneration { message: String },

    #[error("Failed to send email: {details}")]
    EmailDispatch { details: String },

    #[error("Internal server error during {stage}: {}", .details.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Unexpected {
        stage: DispatchStage,
        details: Option<String>,
    },
}

impl DispatchError {
    /// Build an unexpected failure, dropping empty messages
    pub fn unexpected(stage: DispatchStage, details: impl Into<String>) -> Self {
        let details = details.into();
        Self::Unexpected {
            stage,
            details: (!details.trim().is_empty()).then_some(details),
        }
    }

    pub fn stage(&self) -> DispatchStage {
        match self {
            DispatchError::InputValidation => DispatchStage::ValidatingInput,
            DispatchError::ConfigurationMissing => DispatchStage::CheckingConfig,
            DispatchError::MalformedRequest { .. } => DispatchStage::Received,
            DispatchError::CodeGeneration { .. } => DispatchStage::GeneratingCode,
            DispatchError::EmailDispatch { .. } => DispatchStage::DispatchingEmail,
            DispatchError::Unexpected { stage, .. } => *stage,
        }
    }

    /// HTTP status the failure maps to
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::InputValidation => 400,
            _ => 500,
        }
    }

    /// Value of the `error` field on the wire
    pub fn error_message(&self) -> &str {
        match self {
            DispatchError::InputValidation => EMAIL_REQUIRED,
            DispatchError::ConfigurationMissing => CONFIGURATION_MISSING,
            DispatchError::CodeGeneration { message } => message,
            DispatchError::EmailDispatch { .. } => SEND_FAILED,
            DispatchError::MalformedRequest { .. } | DispatchError::Unexpected { .. } => {
                INTERNAL_ERROR
            }
        }
    }

    /// Value of the `details` field on the wire, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            DispatchError::EmailDispatch { details } => Some(details),
            DispatchError::MalformedRequest { details } => Some(details),
            DispatchError::Unexpected { details, .. } => {
                Some(details.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            _ => None,
        }
    }

    /// Render the compatibility JSON body
    pub fn to_response(&self) -> DispatchResponse {
        let response = DispatchResponse::error(self.error_message());
        match self.details() {
            Some(details) => response.with_details(details),
            None => response,
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Failure reported by the backend collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered and reported an error
    #[error("{message}")]
    Remote { message: String },

    /// No usable answer: connection failure, timeout, undecodable body
    #[error("{message}")]
    Transport { message: String },
}

impl BackendError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(DispatchError::InputValidation.status_code(), 400);
        assert_eq!(DispatchError::ConfigurationMissing.status_code(), 500);
        assert_eq!(
            DispatchError::unexpected(DispatchStage::GeneratingCode, "timeout").status_code(),
            500
        );
    }

    #[test]
    fn test_wire_rendering() {
        let cases = [
            (DispatchError::InputValidation, json!({ "error": "Email is required" })),
            (
                DispatchError::ConfigurationMissing,
                json!({ "error": "Supabase configuration missing" }),
            ),
            (
                DispatchError::CodeGeneration {
                    message: "function generate_verification_code does not exist".into(),
                },
                json!({ "error": "function generate_verification_code does not exist" }),
            ),
            (
                DispatchError::EmailDispatch {
                    details: "Edge Function returned a non-2xx status code".into(),
                },
                json!({
                    "error": "Failed to send email",
                    "details": "Edge Function returned a non-2xx status code"
                }),
            ),
            (
                DispatchError::MalformedRequest {
                    details: "expected value at line 1 column 1".into(),
                },
                json!({
                    "error": "Internal server error",
                    "details": "expected value at line 1 column 1"
                }),
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(serde_json::to_value(error.to_response()).unwrap(), expected);
        }
    }

    #[test]
    fn test_unexpected_without_message_reports_unknown_error() {
        let error = DispatchError::unexpected(DispatchStage::DispatchingEmail, "  ");

        assert_eq!(error.stage(), DispatchStage::DispatchingEmail);
        assert_eq!(error.details(), Some(UNKNOWN_ERROR));
        assert_eq!(
            serde_json::to_value(error.to_response()).unwrap(),
            json!({ "error": "Internal server error", "details": "Unknown error" })
        );
    }
}
