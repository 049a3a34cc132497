//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the inline viewport on
//! stdout. `RUST_LOG` takes precedence over the configured default filter.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the configured filter parse.
const FALLBACK_FILTER: &str = "warn";

/// Build the filter from an optional `RUST_LOG` value and a default directive.
pub fn build_filter(rust_log: Option<&str>, default_filter: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), default_filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init()?;

    tracing::debug!(default_filter, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        let filter = build_filter(Some("marketx=trace"), "marketx=warn");
        assert_eq!(filter.to_string().to_lowercase(), "marketx=trace");
    }

    #[test]
    fn test_default_filter_used() {
        let filter = build_filter(None, "marketx=info");
        assert_eq!(filter.to_string().to_lowercase(), "marketx=info");
    }

    #[test]
    fn test_invalid_directives_fall_back() {
        let filter = build_filter(Some("marketx=notalevel"), "marketx=alsonotalevel");
        assert_eq!(filter.to_string().to_lowercase(), "warn");
    }
}
