//! Backend response shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One search result as returned by the backend.
///
/// The record is opaque to this crate and is passed on exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult(Value);

impl SearchResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field of the record
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SearchResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Error object the backend sends in place of a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: Value,
    pub value: Value,
}

impl ErrorPayload {
    /// Render as `"{message}: {value}"`, leaving string fields unquoted
    pub fn describe(&self) -> String {
        format!("{}: {}", render(&self.message), render(&self.value))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Everything the backend may answer with on the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendResponse {
    Results(Vec<SearchResult>),
    Error(ErrorPayload),
}
