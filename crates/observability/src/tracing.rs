//! Tracing subscriber initialization.
//!
//! Verbosity is configured through `RUST_LOG`; each entry point has its own
//! fallback level when the variable is unset or invalid.

use tracing_subscriber::EnvFilter;

/// Fallback directive for [`init`].
pub const DEFAULT_FILTER: &str = "info";

/// Fallback directive for [`init_for_tests`].
pub const DEFAULT_TEST_FILTER: &str = "debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize compact, test-captured logging.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_TEST_FILTER))
        .compact()
        .with_test_writer()
        .try_init();
}
