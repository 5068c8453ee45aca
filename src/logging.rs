//! Development-time tracing for debugging an assignment run.
//!
//! Verbosity is an explicit value handed in by the CLI rather than a
//! process-global toggle, so nothing outside `main` can change it
//! mid-run. `RUST_LOG` always wins when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `verbosity` is the number of `-v` flags: 0 → `warn`, 1 → `info`,
/// 2 → `debug`, 3+ → `trace`. Output: stderr, compact format.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
