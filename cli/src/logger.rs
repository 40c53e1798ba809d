//! Logging setup for the repair binary.
//!
//! Logs go to stderr so the confirmation line on stdout stays clean.
//!
//! The level is picked in this order:
//! 1. `--verbose`: DEBUG, including one line per pass with its match count
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. Default: INFO

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "fixfmt_core=debug,fix_formatting=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "fixfmt_core=info,fix_formatting=info";

/// Picks the filter for the given flags. `verbose` wins over `quiet`.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = build_filter(true, true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = build_filter(false, true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
