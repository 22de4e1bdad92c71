//! Opt-in log capture for tests.
//!
//! The library crates never install a subscriber. Tests that want to see
//! `tracing` output call [`init_tracing`] and filter with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber writing through the test harness.
///
/// Repeated calls are harmless: only the first installation takes effect.
///
/// ```
/// styleframe_test_helpers::logging::init_tracing();
/// styleframe_test_helpers::logging::init_tracing();
/// tracing::debug!("captured by the test writer");
/// ```
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    if installed.is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}
