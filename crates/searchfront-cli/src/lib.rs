//! searchfront command-line interface
//!
//! `searchfront timer` runs the timer gadget on a query; `searchfront search` proxies a
//! query to the search backend and prints the results.

pub mod commands;
pub mod logging;
pub mod router;

pub use router::{Cli, Commands};
