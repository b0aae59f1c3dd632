//! Logging setup for the binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `default_level`.
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
