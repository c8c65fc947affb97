//! Timer gadget: intent detection and duration extraction
//!
//! Both functions are pure. Matching is deliberately loose: keywords are found by
//! substring containment and each time unit is read from its first occurrence only.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

use crate::duration::{total_seconds, TimerDuration};
use crate::keywords::TIMER_KEYWORDS;

// Unit letters are ASCII-only; `(?i)` would also fold e.g. U+017F into `s`.
lazy_static! {
    static ref HOURS_REGEX: Regex =
        Regex::new(r"([0-9]+)\s*[hH](?:[oO][uU][rR][sS]?)?").unwrap();
    static ref MINUTES_REGEX: Regex =
        Regex::new(r"([0-9]+)\s*[mM](?:[iI][nN][uU][tT][eE][sS]?)?").unwrap();
    static ref SECONDS_REGEX: Regex =
        Regex::new(r"([0-9]+)\s*[sS](?:[eE][cC][oO][nN][dD][sS]?)?").unwrap();
}

/// Check whether a query asks for a timer, stopwatch, clock or alarm.
///
/// The query is trimmed and lowercased, then tested for any entry of
/// [`TIMER_KEYWORDS`] as a substring, so `"xclockx"` matches `"clock"`.
pub fn is_timer_query(query: &str) -> bool {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }

    TIMER_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

/// Extract the requested countdown length from a timer query.
///
/// Hours, minutes and seconds are searched independently, case-insensitively, and
/// only the first occurrence of each unit counts. The parts are summed and
/// renormalized, so `"90 minutes"` yields 1h 30m. When no unit appears at all the
/// result is [`TimerDuration::FALLBACK`]; a unit that appears with value zero still
/// counts as present.
pub fn extract_duration(query: &str) -> TimerDuration {
    let hours = first_number(&HOURS_REGEX, query);
    let minutes = first_number(&MINUTES_REGEX, query);
    let seconds = first_number(&SECONDS_REGEX, query);

    if hours.is_none() && minutes.is_none() && seconds.is_none() {
        trace!("No time unit in query, using fallback duration");
        return TimerDuration::FALLBACK;
    }

    let total = total_seconds(
        hours.unwrap_or(0),
        minutes.unwrap_or(0),
        seconds.unwrap_or(0),
    );
    TimerDuration::from_total_seconds(total)
}

fn first_number(regex: &Regex, query: &str) -> Option<u64> {
    regex.captures(query).map(|caps| parse_digits(&caps))
}

// The capture is all ASCII digits, so parsing only fails on overflow.
fn parse_digits(caps: &Captures<'_>) -> u64 {
    caps[1].parse().unwrap_or(u64::MAX)
}
