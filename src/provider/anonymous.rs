use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::quote::Quote;

use super::error::ProviderError;
use super::http::get_json;
use super::picker::RandomPicker;
use super::{ProviderResult, QuoteProvider};

const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct Candidate {
    text: String,
    #[serde(default)]
    author: Option<String>,
}

/// Unauthenticated REST provider returning an array of candidates.
///
/// One candidate is chosen uniformly at random. A missing or blank author
/// becomes `"Unknown"`; candidates with blank text are skipped.
pub struct AnonymousRestProvider {
    client: Client,
    endpoint: String,
    picker: RandomPicker,
}

impl AnonymousRestProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self::with_picker(client, endpoint, RandomPicker::new())
    }

    pub fn with_picker(client: Client, endpoint: impl Into<String>, picker: RandomPicker) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            picker,
        }
    }
}

#[async_trait]
impl QuoteProvider for AnonymousRestProvider {
    fn name(&self) -> &str {
        "anonymous"
    }

    async fn fetch(&self) -> ProviderResult {
        let candidates: Vec<Candidate> = get_json(self.client.get(&self.endpoint)).await?;
        let usable: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| !c.text.trim().is_empty())
            .collect();

        let chosen = self.picker.pick(&usable).ok_or(ProviderError::EmptyResult)?;
        let author = chosen
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);

        Quote::new(chosen.text.as_str(), author, None)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}
