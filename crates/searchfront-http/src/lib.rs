//! Centralized HTTP client for searchfront
//!
//! Provides a mockable, configurable HTTP client wrapper used to reach the search backend.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpClientTrait`
//! - **Configurable**: Timeouts, proxy, user-agent, redirects
//! - **Connection pooling**: Managed by underlying reqwest client
//! - **Transparent decompression**: gzip, deflate and brotli bodies are decoded by reqwest
//!
//! The client performs exactly one request per call. It never retries and never turns
//! a non-success status into an error, so callers can inspect error bodies themselves.

pub mod client;
pub mod config;
pub mod error;

pub use client::{shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use error::{HttpError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};
