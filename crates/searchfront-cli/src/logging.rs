// Logging setup for the CLI

use tracing::Level;

/// Pick the log level for the given CLI flags; `quiet` wins over `verbose`
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global tracing subscriber, writing to stderr
pub fn init_logging(verbose: bool, quiet: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), Level::INFO);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::WARN);
        assert_eq!(level_for(true, true), Level::WARN);
    }
}
