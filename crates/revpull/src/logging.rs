//! Logging initialization
//!
//! Sets up the global tracing subscriber. Library code logs through
//! `tracing` macros only; the binary prints the final user-facing summary.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging.
///
/// The `--verbose` flag selects the default level; `RUST_LOG` directives
/// take precedence when set. Should only be called once at startup.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
