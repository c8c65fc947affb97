//! Backend URL construction

use url::Url;

use crate::error::{FetchError, Result};
use crate::params::SearchParams;

/// Build the full URL for `endpoint` under the API base URL.
///
/// The base path is kept as a prefix, so `http://host/api` and `http://host/api/` both
/// give `http://host/api/search`. Parameters become the query string, replacing any
/// query the base URL carried.
pub fn create_api_url(base: &str, endpoint: &str, params: &SearchParams) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| FetchError::UrlConstruction(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::UrlConstruction(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .push(endpoint);

    url.set_query(None);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_endpoint_to_root() {
        let url = create_api_url("http://localhost:3030", "search", &SearchParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3030/search");
    }

    #[test]
    fn test_keeps_base_path_prefix() {
        let params = SearchParams::new();
        let without_slash = create_api_url("https://api.example.com/v1", "search", &params).unwrap();
        let with_slash = create_api_url("https://api.example.com/v1/", "search", &params).unwrap();

        assert_eq!(without_slash.as_str(), "https://api.example.com/v1/search");
        assert_eq!(with_slash, without_slash);
    }

    #[test]
    fn test_encodes_params() {
        let params = SearchParams::new().with("q", "egg timer & more").with("pages", "1");
        let url = create_api_url("http://localhost:3030", "search", &params).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:3030/search?q=egg+timer+%26+more&pages=1"
        );
    }

    #[test]
    fn test_invalid_base_is_url_construction_error() {
        let result = create_api_url("not a url", "search", &SearchParams::new());
        assert!(matches!(result, Err(FetchError::UrlConstruction(_))));
    }

    #[test]
    fn test_cannot_be_a_base() {
        let result = create_api_url("mailto:admin@example.com", "search", &SearchParams::new());
        match result {
            Err(FetchError::UrlConstruction(message)) => {
                assert!(message.contains("cannot be a base URL"));
            }
            other => panic!("expected UrlConstruction, got {other:?}"),
        }
    }
}
