//! Environment configuration module

use serde::{Deserialize, Serialize};

use super::EnvSource;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging/test environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Get environment from `ENVIRONMENT`, `ENV` or `RUST_ENV`
    pub fn from_source(env: &impl EnvSource) -> Self {
        ["ENVIRONMENT", "ENV", "RUST_ENV"]
            .iter()
            .find_map(|name| env.get_non_empty(name))
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Whether diagnostic values (such as generated codes) may be echoed to callers
    pub fn allows_diagnostics(&self) -> bool {
        !self.is_production()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_from;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("Staging".parse::<Environment>(), Ok(Environment::Staging));
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_lookup_order() {
        let env = env_from(&[("ENV", "production"), ("RUST_ENV", "staging")]);
        assert_eq!(Environment::from_source(&env), Environment::Production);

        let env = env_from(&[("ENVIRONMENT", "nonsense")]);
        assert_eq!(Environment::from_source(&env), Environment::Development);
    }

    #[test]
    fn test_diagnostics_hidden_in_production() {
        assert!(Environment::Development.allows_diagnostics());
        assert!(Environment::Staging.allows_diagnostics());
        assert!(!Environment::Production.allows_diagnostics());
    }
}
