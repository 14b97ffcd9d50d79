use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::quote::Quote;

use super::error::ProviderError;
use super::http::get_json;
use super::{ProviderResult, QuoteProvider};

#[derive(Debug, Deserialize)]
struct RandomQuote {
    content: String,
    author: String,
}

/// REST provider whose endpoint returns one `{content, author}` object.
pub struct QuotableProvider {
    client: Client,
    endpoint: String,
}

impl QuotableProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QuoteProvider for QuotableProvider {
    fn name(&self) -> &str {
        "quotable"
    }

    async fn fetch(&self) -> ProviderResult {
        let body: RandomQuote = get_json(self.client.get(&self.endpoint)).await?;
        Quote::new(body.content, body.author, None)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}
