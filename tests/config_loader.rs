use std::io::Write;
use std::time::Duration;

use quotecard::config::{build_auth_header, Config, ConfigError, CredentialStatus};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.fetch.timeout_seconds, 5);
    assert_eq!(config.fetch.connect_timeout_seconds, 3);

    assert!(config.keyed.enabled);
    assert_eq!(config.keyed.endpoint, "https://api.api-ninjas.com/v1/quotes");
    assert_eq!(config.keyed.api_key_env, "QUOTECARD_API_KEY");
    assert!(config.keyed.api_key.is_none());

    assert!(config.anonymous.enabled);
    assert_eq!(config.anonymous.endpoint, "https://type.fit/api/quotes");

    assert!(!config.quotable.enabled);
    assert!(config.static_quotes.quotes.is_none());

    assert_eq!(config.ui.notification_duration(), Duration::from_millis(2000));
    assert_eq!(config.share.intent_url, "https://twitter.com/intent/tweet");
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("quotecard/config.toml"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config(
        r#"
[anonymous]
endpoint = "http://localhost:9000/quotes"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.anonymous.endpoint, "http://localhost:9000/quotes");
    assert!(config.anonymous.enabled);
    assert_eq!(config.fetch.timeout_seconds, 5);
    assert!(config.keyed.enabled);
}

#[test]
fn test_static_quotes_override() {
    let file = write_config(
        r#"
[[static_quotes.quotes]]
content = "Custom wisdom."
author = "Me"
category = "local"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    let quotes = config.static_quotes.quotes.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].content(), "Custom wisdom.");
    assert_eq!(quotes[0].category(), Some("local"));
}

#[test]
fn test_empty_static_list_fails_validation() {
    let file = write_config(
        r#"
[static_quotes]
quotes = []
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_blank_static_quote_fails_parsing() {
    let file = write_config(
        r#"
[[static_quotes.quotes]]
content = "   "
author = "Nobody"
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let file = write_config(
        r#"
[fetch]
timeout_seconds = 0
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("timeouts must be greater than zero"));
}

#[test]
fn test_enabled_provider_without_endpoint_fails_validation() {
    let file = write_config(
        r#"
[quotable]
enabled = true
endpoint = ""
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("quotable"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[keyed\nenabled = ");

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_explicit_api_key_wins() {
    let mut config = Config::default();
    config.keyed.api_key = Some("inline-key".to_string());
    config.keyed.api_key_env = "QUOTECARD_TEST_UNSET_VAR".to_string();

    match config.keyed.resolve_credential() {
        CredentialStatus::Configured(key) => assert_eq!(key.expose(), "inline-key"),
        CredentialStatus::Unconfigured { .. } => panic!("expected configured key"),
    }
    assert_eq!(
        build_auth_header(&config.keyed),
        Some(("x-api-key".to_string(), "inline-key".to_string()))
    );
}

#[test]
fn test_missing_key_yields_no_header() {
    let mut config = Config::default();
    config.keyed.api_key_env = "QUOTECARD_TEST_DEFINITELY_UNSET".to_string();

    assert!(build_auth_header(&config.keyed).is_none());
}

#[test]
fn test_zero_tick_fails_validation() {
    let file = write_config(
        r#"
[ui]
tick_ms = 0
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_ms"));
}

#[test]
fn test_zero_notification_duration_fails_validation() {
    let file = write_config(
        r#"
[ui]
notification_ms = 0
"#,
    );

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_explicit_missing_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
