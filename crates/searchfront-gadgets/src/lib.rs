//! Query gadgets for searchfront
//!
//! A gadget is a small widget shown above the search results when the query asks for
//! one. This crate holds the pure, synchronous logic behind them:
//!
//! - [`timer::is_timer_query`] decides whether a query asks for a timer, stopwatch,
//!   clock or alarm
//! - [`timer::extract_duration`] pulls the requested countdown length out of the query
//!
//! Nothing here performs I/O or holds mutable state.

pub mod duration;
pub mod keywords;
pub mod timer;

pub use duration::{hms_from_total, total_seconds, TimerDuration};
pub use keywords::TIMER_KEYWORDS;
pub use timer::{extract_duration, is_timer_query};
