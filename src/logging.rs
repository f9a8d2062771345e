// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Sets up a `tracing` subscriber writing to stderr. The level defaults to
//! INFO and can be changed with the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=art_space=debug` to trace gallery navigation.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`Error::Logging`] if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("Art Space v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
