//! Opt-in tracing setup for applications that embed this crate.
//!
//! The helpers in this crate only emit events through `tracing` macros.
//! Nothing is printed unless the host installs a subscriber, either its own
//! or the one from [`init`].

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Fails instead of panicking if a global subscriber is already set.
///
/// # Example
/// ```bash
/// RUST_LOG=utils=debug ./my-app
/// ```
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .context("install tracing subscriber")
}
