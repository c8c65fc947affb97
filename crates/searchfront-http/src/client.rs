//! HTTP client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Method, Response};
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Mockable HTTP client trait
///
/// Implementations return the response whatever its status code; only failures to get
/// a response at all (DNS, connect, TLS, timeout) are reported as `Err`.
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Execute a GET request with the given headers
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<Response>;
}

/// Production HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        if config.pool_enabled {
            builder = builder.pool_idle_timeout(config.pool_idle_timeout());
        } else {
            builder = builder.pool_max_idle_per_host(0);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<Response> {
        debug!("HTTP GET: {}", url);

        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        let response = self
            .inner
            .request(Method::GET, url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| HttpError::from_send(e, self.config.timeout()))?;

        debug!("HTTP GET completed with status {}", response.status());
        Ok(response)
    }
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = HttpClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_with_config() {
        let config = HttpConfig::new().with_timeout(Duration::from_secs(10));

        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_client_with_proxy() {
        let config = HttpConfig::default().with_proxy("http://proxy.example.com:8080");

        let client = HttpClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_proxy() {
        let config = HttpConfig::default().with_proxy("http://[::1");

        let result = HttpClient::new(config);
        assert!(matches!(result, Err(HttpError::InvalidProxy(_))));
    }

    #[tokio::test]
    async fn test_get_invalid_url() {
        let client = HttpClient::with_defaults().unwrap();
        let result = client.get("not a url", HeaderMap::new()).await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[test]
    fn test_shared_client_creation() {
        let client = shared_client(HttpConfig::default());
        assert!(client.is_ok());
    }
}
