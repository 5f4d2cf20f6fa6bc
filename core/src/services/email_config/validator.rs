//! Email configuration validator

use mp_shared::config::email::EMAIL_PROVIDER_VAR;
use mp_shared::{BackendConfig, EmailProvider, EnvSource};

use super::types::{CheckedVariable, ValidationFailure, ValidationReport};

/// Check that the backend and the selected email provider are configured.
///
/// 1. Backend URL and key must both be present, otherwise stop.
/// 2. `EMAIL_PROVIDER` selects the provider (default: Resend).
/// 3. Every credential the provider requires must be present.
///
/// An unrecognized provider name is reported as its own failure, never as
/// missing credentials. The function only reads `env`.
pub fn validate_email_config(env: &impl EnvSource) -> ValidationReport {
    let mut checked_variables: Vec<CheckedVariable> = BackendConfig::REQUIRED_VARIABLES
        .into_iter()
        .map(|name| check(env, name))
        .collect();

    let missing_backend = missing_names(&checked_variables);
    if !missing_backend.is_empty() {
        return ValidationReport {
            passed: false,
            provider: None,
            provider_defaulted: false,
            checked_variables,
            failure: Some(ValidationFailure::MissingBackend {
                missing: missing_backend,
            }),
        };
    }

    let (provider, provider_defaulted) = match env.get_non_empty(EMAIL_PROVIDER_VAR) {
        None => (EmailProvider::default(), true),
        Some(name) => match name.parse::<EmailProvider>() {
            Ok(provider) => (provider, false),
            Err(_) => {
                return ValidationReport {
                    passed: false,
                    provider: None,
                    provider_defaulted: false,
                    checked_variables,
                    failure: Some(ValidationFailure::UnrecognizedProvider {
                        name: name.trim().to_string(),
                    }),
                };
            }
        },
    };

    let credentials: Vec<CheckedVariable> = provider
        .required_variables()
        .iter()
        .map(|name| check(env, name))
        .collect();
    let missing = missing_names(&credentials);
    checked_variables.extend(credentials);

    let failure = (!missing.is_empty())
        .then(|| ValidationFailure::MissingCredentials { provider, missing });

    ValidationReport {
        passed: failure.is_none(),
        provider: Some(provider),
        provider_defaulted,
        checked_variables,
        failure,
    }
}

fn check(env: &impl EnvSource, name: &str) -> CheckedVariable {
    CheckedVariable {
        name: name.to_string(),
        present: env.is_present(name),
    }
}

fn missing_names(variables: &[CheckedVariable]) -> Vec<String> {
    variables
        .iter()
        .filter(|v| !v.present)
        .map(|v| v.name.clone())
        .collect()
}
