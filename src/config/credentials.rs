//! Credential resolution from configuration.
//!
//! The keyed provider's API key is never compiled in. It is read from the
//! config file or from an environment variable when the chain is built.

use super::types::KeyedConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the keyed provider.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl KeyedConfig {
    /// Resolve the API key: explicit `api_key` first, then `api_key_env`.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.trim().to_string()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(key.trim().to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and ${} is empty", self.api_key_env),
            },
        }
    }
}
