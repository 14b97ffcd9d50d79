use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{build_auth_header, AuthHeader, KeyedConfig};
use crate::quote::Quote;

use super::error::ProviderError;
use super::http::get_json;
use super::{ProviderResult, QuoteProvider};

/// One element of the keyed endpoint's response array.
#[derive(Debug, Deserialize)]
struct KeyedQuote {
    quote: String,
    author: String,
    #[serde(default)]
    category: Option<String>,
}

/// REST provider authenticated with a static `x-api-key` header.
///
/// Expects a JSON array and maps its first element.
pub struct KeyedRestProvider {
    client: Client,
    endpoint: String,
    auth: Option<AuthHeader>,
}

impl KeyedRestProvider {
    pub fn new(client: Client, endpoint: impl Into<String>, auth: Option<AuthHeader>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            auth,
        }
    }

    /// Build from config, resolving the API key now.
    pub fn from_config(client: Client, config: &KeyedConfig) -> Self {
        Self::new(client, config.endpoint.clone(), build_auth_header(config))
    }
}

#[async_trait]
impl QuoteProvider for KeyedRestProvider {
    fn name(&self) -> &str {
        "keyed"
    }

    async fn fetch(&self) -> ProviderResult {
        let Some((name, value)) = &self.auth else {
            return Err(ProviderError::NotConfigured {
                reason: "no API key available".to_string(),
            });
        };

        let request = self.client.get(&self.endpoint).header(name.as_str(), value.as_str());
        let items: Vec<KeyedQuote> = get_json(request).await?;
        let first = items.into_iter().next().ok_or(ProviderError::EmptyResult)?;

        Quote::new(first.quote, first.author, first.category)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}
