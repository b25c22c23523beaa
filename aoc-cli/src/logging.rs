//! Diagnostic tracing for the runner
//!
//! Tracing output goes to stderr and is controlled by `RUST_LOG`; stdout
//! only ever carries the report.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, or `debug` when `verbose`.
///
/// # Example
/// ```bash
/// RUST_LOG=aoc_solver=debug aoc --year 2018
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
