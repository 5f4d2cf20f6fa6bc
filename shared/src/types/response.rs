//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON body returned by the verification dispatch endpoint.
///
/// Success bodies carry `success`, `message` and optionally `code`; failure
/// bodies carry `error` and optionally `details`. Absent fields are omitted
/// so both shapes match what existing clients already parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchResponse {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Verification code echoed back for diagnostics, never in production
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DispatchResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>, code: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            code,
            ..Default::default()
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Attach details to an error response
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Whether backend URL and key are both configured
    pub backend_configured: bool,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}
