//! Development-time tracing for debugging the launcher.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. Product output
//! (the missing-input warning and the completion report) is plain stdout and
//! is unaffected by this module.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads the `RUST_LOG` env var, defaulting to `warn` if unset. Output goes
/// to stderr in compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=launcher=debug launcher
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
