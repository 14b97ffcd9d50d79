use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::FetchConfig;

use super::error::ProviderError;

/// Build the HTTP client shared by all remote providers.
pub fn build_client(fetch: &FetchConfig) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(fetch.connect_timeout())
        .timeout(fetch.timeout())
        .build()
}

/// Send `request` and decode a 2xx JSON body into `T`.
pub(super) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .header("accept", "application/json")
        .send()
        .await
        .map_err(ProviderError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(ProviderError::Network)?;
    Ok(serde_json::from_slice(&body)?)
}
