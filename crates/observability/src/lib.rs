//! Tracing/logging setup shared by hosts and test suites.

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing for a test binary.
///
/// Output goes through the libtest writer so it is captured per test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Subscriber construction (filters, formats).
pub mod tracing;
