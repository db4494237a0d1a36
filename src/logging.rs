//! Tracing subscriber setup for the CLI
//!
//! Logs go to stderr so response bodies on stdout stay machine readable.

use crate::constants::logging::DEFAULT_FILTER;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count
///
/// `RUST_LOG`, when set, takes precedence over this.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "warn,ghub=info,ghub_api=info",
        2 => "info,ghub=debug,ghub_api=debug",
        _ => "debug,ghub=trace,ghub_api=trace",
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(verbose: u8, json: bool) {
    let directive =
        std::env::var("RUST_LOG").unwrap_or_else(|_| filter_for_verbosity(verbose).to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), "warn");
        assert!(filter_for_verbosity(1).contains("ghub_api=info"));
        assert!(filter_for_verbosity(2).contains("ghub_api=debug"));
        assert!(filter_for_verbosity(3).contains("ghub_api=trace"));
        assert_eq!(filter_for_verbosity(9), filter_for_verbosity(3));
    }

    #[test]
    fn test_filters_parse() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(filter_for_verbosity(verbose)).is_ok());
        }
    }
}
