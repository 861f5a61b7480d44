//! Diagnostic logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Install a `tracing` subscriber that writes to stderr at the configured
/// level.
///
/// Returns `false` if a global subscriber was already set; calling this
/// more than once is harmless.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::new(config.level.as_str());
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .is_ok()
}
