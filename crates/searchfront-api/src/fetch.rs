//! Search result fetching

use std::sync::Arc;

use searchfront_http::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING},
    HttpClient, HttpClientTrait, HttpError,
};
use tracing::{debug, warn};

use crate::settings::ApiConfig;
use crate::endpoint::create_api_url;
use crate::error::{FetchError, Result};
use crate::params::SearchParams;
use crate::result::{BackendResponse, SearchResult};

/// Backend endpoint serving search results
pub const SEARCH_ENDPOINT: &str = "search";

/// Headers sent with every search request
fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers
}

/// Fetch search results for `params` from the backend at `api_url`.
///
/// Performs exactly one GET (GET keeps responses cacheable by CDNs) and returns the
/// backend's result list untouched. See [`FetchError`] for how each failure maps to a
/// status code.
pub async fn fetch_results(
    api_url: &str,
    params: &SearchParams,
    client: &dyn HttpClientTrait,
) -> Result<Vec<SearchResult>> {
    let url = create_api_url(api_url, SEARCH_ENDPOINT, params).map_err(|e| {
        warn!("Could not build search URL from {}: {}", api_url, e);
        e
    })?;

    debug!("Fetching search results from {}", url);

    let response = client
        .get(url.as_str(), request_headers())
        .await
        .map_err(|e| {
            warn!("Search backend unreachable: {}", e);
            FetchError::Transport(e.to_string())
        })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        warn!("Failed to read search response body: {}", e);
        FetchError::ResponseParse(e.to_string())
    })?;

    let parsed: BackendResponse = serde_json::from_slice(&body).map_err(|e| {
        warn!("Search response is not valid JSON: {}", e);
        FetchError::ResponseParse(e.to_string())
    })?;

    match parsed {
        BackendResponse::Results(results) => {
            debug!("Received {} search results", results.len());
            Ok(results)
        }
        BackendResponse::Error(payload) => {
            let message = payload.describe();
            warn!("Search backend reported error ({}): {}", status, message);
            Err(FetchError::Backend { status, message })
        }
    }
}

/// Search fetcher bound to a configured backend and HTTP client
pub struct ResultFetcher {
    config: ApiConfig,
    client: Arc<dyn HttpClientTrait>,
}

impl ResultFetcher {
    /// Create a fetcher with an injected client
    pub fn new(config: ApiConfig, client: Arc<dyn HttpClientTrait>) -> Self {
        Self { config, client }
    }

    /// Create a fetcher using the production client built from `config.http`
    pub fn from_config(config: ApiConfig) -> std::result::Result<Self, HttpError> {
        let client = HttpClient::new(config.http.clone())?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch search results for `params`
    pub async fn fetch(&self, params: &SearchParams) -> Result<Vec<SearchResult>> {
        fetch_results(&self.config.api_url, params, self.client.as_ref()).await
    }
}
