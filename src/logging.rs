//! Logging initialisation.
//!
//! The engine logs through `tracing`; this module installs the
//! `tracing-subscriber` formatter that prints those events.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialises the global subscriber.
///
/// # Environment Variables
///
/// - `RUST_LOG`: log filter (default: `info`), e.g. `RUST_LOG=debug` or
///   `RUST_LOG=materials_engine=trace`
///
/// # Example
///
/// ```no_run
/// use materials_engine::logging;
///
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialises a debug-level subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
