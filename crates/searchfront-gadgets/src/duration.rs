//! Hours/minutes/seconds arithmetic for the timer gadget

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// A countdown length split into hours, minutes and seconds.
///
/// Values built through [`TimerDuration::new`] or [`TimerDuration::from_total_seconds`]
/// always keep `minutes` and `seconds` in `0..=59`; `hours` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimerDuration {
    /// Duration used when a timer query names no explicit length (five minutes).
    pub const FALLBACK: TimerDuration = TimerDuration {
        hours: 0,
        minutes: 5,
        seconds: 0,
    };

    /// Build a normalized duration, carrying minute and second overflow upward.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self::from_total_seconds(total_seconds(hours, minutes, seconds))
    }

    /// Split a number of seconds into hours, minutes and seconds.
    pub fn from_total_seconds(total: u64) -> Self {
        let (hours, minutes, seconds) = hms_from_total(total);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total length in seconds, saturating at `u64::MAX`.
    pub fn total_seconds(&self) -> u64 {
        total_seconds(self.hours, self.minutes, self.seconds)
    }

    /// The `(hours, minutes, seconds)` triple.
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.hours, self.minutes, self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl Default for TimerDuration {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl From<TimerDuration> for Duration {
    fn from(value: TimerDuration) -> Self {
        Duration::from_secs(value.total_seconds())
    }
}

impl From<(u64, u64, u64)> for TimerDuration {
    fn from((hours, minutes, seconds): (u64, u64, u64)) -> Self {
        Self::new(hours, minutes, seconds)
    }
}

/// Formats as `HH:MM:SS`; hours widen past two digits when needed.
impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Total seconds for the given parts, saturating instead of overflowing.
pub fn total_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}

/// Split seconds into `(hours, minutes, seconds)` with minutes and seconds below 60.
pub fn hms_from_total(total: u64) -> (u64, u64, u64) {
    (
        total / SECONDS_PER_HOUR,
        (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        total % SECONDS_PER_MINUTE,
    )
}
