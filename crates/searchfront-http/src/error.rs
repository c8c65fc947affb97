//! HTTP client error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
///
/// Every variant describes a failure to obtain a response at all. A response with a
/// 4xx/5xx status is still a successful transport result.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Could not connect to the remote host
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Classify a reqwest error raised while sending a request
    pub fn from_send(err: reqwest::Error, timeout: std::time::Duration) -> Self {
        if err.is_timeout() {
            HttpError::Timeout(timeout)
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else {
            HttpError::RequestFailed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timeout_display() {
        let err = HttpError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "Request timed out after 5s");
    }

    #[test]
    fn test_connection_display() {
        let err = HttpError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }
}
