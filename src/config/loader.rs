use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quotecard/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quotecard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit `path`.
    ///
    /// The file must exist; it is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts are non-zero
    /// - UI tick and notification durations are non-zero
    /// - Every enabled remote provider has an endpoint
    /// - A static quote override, when present, is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_seconds == 0 || self.fetch.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Fetch timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_ms == 0 || self.ui.notification_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick_ms and notification_ms must be greater than zero".to_string(),
            });
        }

        let endpoints = [
            ("keyed", self.keyed.enabled, &self.keyed.endpoint),
            ("anonymous", self.anonymous.enabled, &self.anonymous.endpoint),
            ("quotable", self.quotable.enabled, &self.quotable.endpoint),
        ];
        for (name, enabled, endpoint) in endpoints {
            if enabled && endpoint.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Provider '{}' is enabled but has no endpoint", name),
                });
            }
        }

        if matches!(&self.static_quotes.quotes, Some(quotes) if quotes.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Static quote list must contain at least one quote".to_string(),
            });
        }

        Ok(())
    }
}
