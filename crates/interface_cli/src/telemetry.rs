//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter
///
/// `RUST_LOG` takes precedence over the configured level; an unparsable
/// level falls back to `info`.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes the tracing subscriber for structured logging
///
/// Logs go to stderr so that replay output on stdout stays valid JSON.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `json` - Emit one JSON object per event instead of human-readable lines
pub fn init_tracing(log_level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(log_filter(log_level));

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        let filter = log_filter("domain_claims=debug,infra_store=warn");
        assert!(!filter.to_string().is_empty());
    }
}
