//! Validation report types

use mp_shared::EmailProvider;

/// One variable looked at during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedVariable {
    pub name: String,
    pub present: bool,
}

/// Why a configuration did not pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Backend URL or key missing; provider checks never ran
    MissingBackend { missing: Vec<String> },
    /// The selected provider lacks one or more credentials
    MissingCredentials {
        provider: EmailProvider,
        missing: Vec<String>,
    },
    /// `EMAIL_PROVIDER` names a provider outside the supported set
    UnrecognizedProvider { name: String },
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationFailure::MissingBackend { missing } => {
                write!(f, "Missing backend configuration: {}", missing.join(", "))
            }
            ValidationFailure::MissingCredentials { provider, missing } => write!(
                f,
                "{} configuration incomplete, missing: {}",
                provider.display_name(),
                missing.join(", ")
            ),
            ValidationFailure::UnrecognizedProvider { name } => {
                let supported: Vec<&str> =
                    EmailProvider::ALL.iter().map(|p| p.name()).collect();
                write!(
                    f,
                    "Unknown email provider: {} (supported: {})",
                    name,
                    supported.join(", ")
                )
            }
        }
    }
}

/// Outcome of one validator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub passed: bool,
    /// Selected provider, `None` when unrecognized or never reached
    pub provider: Option<EmailProvider>,
    /// `EMAIL_PROVIDER` was unset and the default provider was used
    pub provider_defaulted: bool,
    /// Variables checked, in check order
    pub checked_variables: Vec<CheckedVariable>,
    pub failure: Option<ValidationFailure>,
}

impl ValidationReport {
    /// Names of checked variables that were absent
    pub fn missing_variables(&self) -> Vec<&str> {
        self.checked_variables
            .iter()
            .filter(|v| !v.present)
            .map(|v| v.name.as_str())
            .collect()
    }

    /// Console diagnostics, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Checking email verification configuration".to_string()];

        for variable in &self.checked_variables {
            let mark = if variable.present { "ok" } else { "MISSING" };
            lines.push(format!("  [{}] {}", mark, variable.name));
        }

        if let Some(provider) = self.provider {
            let suffix = if self.provider_defaulted { " (default)" } else { "" };
            lines.push(format!(
                "Email provider: {}{}",
                provider.display_name(),
                suffix
            ));
        }

        match &self.failure {
            Some(failure) => lines.push(format!("FAILED: {}", failure)),
            None => lines.push("PASSED: email configuration is complete".to_string()),
        }

        lines
    }
}
