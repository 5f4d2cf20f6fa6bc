use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of a test email request.
///
/// A missing `email` or explicit `null` deserializes to `None`; both are
/// rejected by validation rather than by the parser.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestEmailRequest {
    #[serde(default)]
    #[validate(required, custom = "not_blank")]
    pub email: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
