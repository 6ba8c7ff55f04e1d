//! Server configuration parsed from environment variables.

use thiserror::Error;

/// Environment variable holding the Google Places / Static Maps credential.
pub const API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {var}")]
    MissingVar { var: String },
}

/// Credential for the Google Places / Static Maps services.
///
/// Built once in `main` and injected into handlers through `AppState`, so
/// request handling never reads the environment directly.
#[derive(Clone)]
pub struct PlacesConfig {
    pub api_key: String,
}

impl PlacesConfig {
    /// Read the credential from `GOOGLE_PLACES_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(API_KEY_VAR)
    }

    pub(crate) fn from_env_var(var: &str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(var)
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingVar { var: var.to_owned() })?;
        Ok(Self { api_key })
    }
}

impl std::fmt::Debug for PlacesConfig {
    // The key must never reach logs, so Debug redacts it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig").field("api_key", &"<redacted>").finish()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
