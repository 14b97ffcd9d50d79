//! Authentication header building for the keyed provider.

use super::credentials::CredentialStatus;
use super::types::KeyedConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `x-api-key` header for the keyed provider.
///
/// Returns `None` when no key can be resolved.
pub fn build_auth_header(keyed: &KeyedConfig) -> Option<AuthHeader> {
    match keyed.resolve_credential() {
        CredentialStatus::Configured(key) => {
            Some(("x-api-key".to_string(), key.expose().to_string()))
        }
        CredentialStatus::Unconfigured { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_api_key_header_from_env() {
        let env_var = "QUOTECARD_TEST_API_KEY_HEADER";
        env::set_var(env_var, "test-key-123");
        let keyed = KeyedConfig {
            api_key: None,
            api_key_env: env_var.to_string(),
            ..KeyedConfig::default()
        };

        let header = build_auth_header(&keyed);
        env::remove_var(env_var);

        assert_eq!(
            header,
            Some(("x-api-key".to_string(), "test-key-123".to_string()))
        );
    }

    #[test]
    fn test_no_header_without_key() {
        let keyed = KeyedConfig {
            api_key: None,
            api_key_env: "QUOTECARD_TEST_NO_SUCH_KEY".to_string(),
            ..KeyedConfig::default()
        };
        assert!(build_auth_header(&keyed).is_none());
    }
}
