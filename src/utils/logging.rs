//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so stdout carries only banners and the results table.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
