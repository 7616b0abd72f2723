//! Logging initialisation for the relay CLI.
//!
//! Diagnostics go to stderr through `tracing` so the dry-run JSON on stdout stays
//! parseable. `RUST_LOG` wins when set; otherwise `--verbose` picks `debug` over `info`.

use crate::errors::{RelayError, Result};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INSTALLED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber once. Concurrent and later calls wait for the
/// first installation and share its outcome.
pub fn init_logging(verbose: bool) -> Result<()> {
    INSTALLED
        .get_or_init(|| install_subscriber(verbose))
        .clone()
        .map_err(RelayError::Logging)
}

fn install_subscriber(verbose: bool) -> std::result::Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| e.to_string())
}
