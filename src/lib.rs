//! Shared helpers for the searchfront integration tests
//!
//! A search page shows the timer gadget when the query asks for one and always loads
//! results; the two never share data. [`render_page`] reproduces that flow.

use searchfront_api::{FetchError, ResultFetcher, SearchParams};
use searchfront_gadgets::{extract_duration, is_timer_query, TimerDuration};

/// What a search page would render for one query
#[derive(Debug)]
pub struct Page {
    /// Countdown shown by the timer gadget, if the query asks for one
    pub timer: Option<TimerDuration>,
    /// Number of results loaded, or the failure to show instead
    pub results: Result<usize, FetchError>,
}

/// Run the timer gadget and the backend fetch for `query`
pub async fn render_page(fetcher: &ResultFetcher, query: &str) -> Page {
    let timer = is_timer_query(query).then(|| extract_duration(query));
    let params = SearchParams::new().with("q", query);
    let results = fetcher.fetch(&params).await.map(|r| r.len());
    Page { timer, results }
}
