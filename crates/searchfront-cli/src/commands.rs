// Command implementations

use searchfront_api::{FetchError, SearchParams};
use searchfront_gadgets::{extract_duration, is_timer_query, TimerDuration};
use serde::Serialize;

/// Outcome of running the timer gadget on a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerReport {
    pub query: String,
    pub is_timer: bool,
    /// Only present when the query has timer intent
    pub duration: Option<TimerDuration>,
}

impl TimerReport {
    pub fn new(query: &str) -> Self {
        let is_timer = is_timer_query(query);
        Self {
            query: query.to_string(),
            is_timer,
            duration: is_timer.then(|| extract_duration(query)),
        }
    }

    /// One-line human-readable form
    pub fn summary(&self) -> String {
        match &self.duration {
            Some(duration) => format!("timer {duration}"),
            None => "no timer intent".to_string(),
        }
    }
}

/// Parse a `KEY=VALUE` argument; the value may itself contain `=`
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

/// Assemble backend parameters: the query words as `q`, then the explicit pairs
pub fn build_params(query: &[String], extra: Vec<(String, String)>) -> SearchParams {
    let mut params = SearchParams::new();
    if !query.is_empty() {
        params.push("q", query.join(" "));
    }
    for (key, value) in extra {
        params.push(key, value);
    }
    params
}

/// Render a fetch failure with its status code, the way a route handler would
pub fn describe_failure(err: &FetchError) -> String {
    format!("{} {}", err.status_code(), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_report_with_intent() {
        let report = TimerReport::new("pomodoro timer 25 minutes");
        assert!(report.is_timer);
        assert_eq!(report.duration.map(|d| d.as_tuple()), Some((0, 25, 0)));
        assert_eq!(report.summary(), "timer 00:25:00");
    }

    #[test]
    fn test_timer_report_fallback_duration() {
        let report = TimerReport::new("reminder alarm");
        assert_eq!(report.duration, Some(TimerDuration::FALLBACK));
    }

    #[test]
    fn test_timer_report_without_intent() {
        let report = TimerReport::new("rust borrow checker");
        assert!(!report.is_timer);
        assert!(report.duration.is_none());
        assert_eq!(report.summary(), "no timer intent");
    }

    #[test]
    fn test_timer_report_json() {
        let report = TimerReport::new("egg timer 3m");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_timer"], true);
        assert_eq!(json["duration"]["minutes"], 3);
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_param("empty=").unwrap().1, "");
        assert!(parse_param("=value").is_err());
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn test_build_params() {
        let query = vec!["kitchen".to_string(), "timer".to_string()];
        let params = build_params(&query, vec![("pages".to_string(), "1".to_string())]);

        assert_eq!(params.query(), Some("kitchen timer"));
        assert_eq!(params.get("pages"), Some("1"));
        assert!(build_params(&[], Vec::new()).is_empty());
    }

    #[test]
    fn test_describe_failure() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(
            describe_failure(&err),
            "502 Bad Gateway Failed to fetch results: connection refused"
        );
    }
}
