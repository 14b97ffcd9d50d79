use serde::Deserialize;
use std::time::Duration;

use crate::quote::Quote;

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub keyed: KeyedConfig,
    #[serde(default)]
    pub anonymous: AnonymousConfig,
    #[serde(default)]
    pub quotable: QuotableConfig,
    #[serde(default)]
    pub static_quotes: StaticQuotesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Network timeouts applied to every remote provider.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Upper bound for one provider attempt, in seconds (default: 5).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds (default: 3).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Keyed REST provider (API-Ninjas style, `x-api-key` header).
#[derive(Debug, Clone, Deserialize)]
pub struct KeyedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_keyed_endpoint")]
    pub endpoint: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Anonymous REST provider returning a list of `{text, author}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnonymousConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_anonymous_endpoint")]
    pub endpoint: String,
}

/// Single-object REST provider returning `{content, author}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotableConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_quotable_endpoint")]
    pub endpoint: String,
}

/// Optional replacement for the built-in static quote list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticQuotesConfig {
    /// `None` keeps the built-in list. `Some(vec![])` is rejected at startup.
    #[serde(default)]
    pub quotes: Option<Vec<Quote>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// How long a transient notification stays visible (default: 2000).
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_intent_url")]
    pub intent_url: String,
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    5
}

fn default_connect_timeout() -> u64 {
    3
}

fn default_keyed_endpoint() -> String {
    "https://api.api-ninjas.com/v1/quotes".to_string()
}

fn default_api_key_env() -> String {
    "QUOTECARD_API_KEY".to_string()
}

fn default_anonymous_endpoint() -> String {
    "https://type.fit/api/quotes".to_string()
}

fn default_quotable_endpoint() -> String {
    "https://api.quotable.io/random".to_string()
}

fn default_notification_ms() -> u64 {
    2000
}

fn default_tick_ms() -> u64 {
    250
}

fn default_intent_url() -> String {
    "https://twitter.com/intent/tweet".to_string()
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl UiConfig {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for KeyedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_keyed_endpoint(),
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for AnonymousConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_anonymous_endpoint(),
        }
    }
}

impl Default for QuotableConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_quotable_endpoint(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_url: default_intent_url(),
        }
    }
}
