//! Development-time tracing for debugging the engine.
//!
//! Dev diagnostics only, via `RUST_LOG`, output to stderr. The engine never
//! prints to stdout; previews, diffs, and counts are returned to the caller,
//! which owns all user-visible rendering.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
