//! Configuration loading, validation and credential resolution.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{
    AnonymousConfig, Config, FetchConfig, KeyedConfig, QuotableConfig, ShareConfig,
    StaticQuotesConfig, UiConfig,
};
