//! Search backend proxy for searchfront
//!
//! Turns a set of query parameters into one GET against the backend `search`
//! endpoint and maps every way that can fail onto an HTTP-style status code:
//!
//! | Failure | Status |
//! |---------|--------|
//! | URL could not be built | 500 |
//! | Request never got a response | 502 |
//! | Body is not valid JSON | 500 |
//! | Backend answered with `{message, value}` | backend's own status |
//!
//! There is no retry, caching or rate limiting; a route handler decides how to
//! present a [`FetchError`] to the user.

pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod params;
pub mod result;
pub mod settings;

pub use endpoint::create_api_url;
pub use error::{FetchError, Result};
pub use fetch::{fetch_results, ResultFetcher, SEARCH_ENDPOINT};
pub use params::SearchParams;
pub use result::{BackendResponse, ErrorPayload, SearchResult};
pub use settings::{ApiConfig, ConfigError, ConfigManager};
