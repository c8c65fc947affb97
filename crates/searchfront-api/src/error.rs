//! Fetch error types

use searchfront_http::StatusCode;
use thiserror::Error;

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Terminal failures of a search fetch, each tied to the status code a route handler
/// should answer with.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be built (server misconfiguration)
    #[error("Failed to create API URL: {0}")]
    UrlConstruction(String),

    /// No response came back from the backend
    #[error("Failed to fetch results: {0}")]
    Transport(String),

    /// The response body was not valid JSON of the expected shape
    #[error("Failed to parse results: {0}")]
    ResponseParse(String),

    /// The backend reported an error in-band
    #[error("{message}")]
    Backend { status: StatusCode, message: String },
}

impl FetchError {
    /// Status code to report upstream for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::UrlConstruction(_) | FetchError::ResponseParse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            FetchError::Transport(_) => StatusCode::BAD_GATEWAY,
            FetchError::Backend { status, .. } => *status,
        }
    }

    /// Whether the failure originates in this service rather than upstream
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            FetchError::UrlConstruction(_) | FetchError::ResponseParse(_)
        )
    }

    /// Whether the backend could not be reached
    pub fn is_gateway(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
