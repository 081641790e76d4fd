//! Diagnostic tracing for the devflags CLI.
//!
//! Diagnostics go to stderr only; stdout carries operation output (`get`
//! values, listings) and must stay machine-consumable. Verbosity never
//! changes operation semantics.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a verbosity level (clamped to 0..=3).
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity.min(3) {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Initialize the tracing subscriber.
///
/// `-v/--verbosity` picks the default level; `RUST_LOG` overrides it when
/// set. Output: stderr, compact format.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
