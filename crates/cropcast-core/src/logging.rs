//! Tracing subscriber setup for shells embedding the CropCast crates.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// The `RUST_LOG` environment variable takes precedence; `default_level` is
/// used when it is not set (typically `[general] log_level` from the config
/// file). Call once per process.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
