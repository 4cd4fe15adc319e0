//! Diagnostic logging on stderr
//!
//! The filter comes from `DIARY_LOG` (standard `EnvFilter` syntax) and
//! defaults to `warn`. `--verbose` overrides both with `debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DIARY_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive from the verbose flag and the `DIARY_LOG` value
pub fn filter_directive(verbose: bool, env_value: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the stderr subscriber. Calling it again is a no-op.
pub fn init_logging(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(filter_directive(false, None), "warn");
        assert_eq!(filter_directive(false, Some("  ")), "warn");
    }

    #[test]
    fn test_env_filter_is_used() {
        assert_eq!(filter_directive(false, Some("diary=info")), "diary=info");
    }

    #[test]
    fn test_verbose_wins() {
        assert_eq!(filter_directive(true, Some("error")), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
