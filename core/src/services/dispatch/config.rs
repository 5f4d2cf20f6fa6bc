//! Configuration for the dispatch service

use mp_shared::Environment;

/// Configuration for the dispatch service
#[derive(Debug, Clone, Default)]
pub struct DispatchServiceConfig {
    /// Echo the code returned by the dispatch call in the success result.
    /// Off unless explicitly enabled for a non-production environment.
    pub expose_code: bool,
}

impl DispatchServiceConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            expose_code: environment.allows_diagnostics(),
        }
    }
}
