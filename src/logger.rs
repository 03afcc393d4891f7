//! Console logger for test diagnostics
//!
//! A logging setup based on `tracing-subscriber`: console output with an
//! `EnvFilter` sourced from `RUST_LOG`, falling back to `info`. A test
//! runner installs this once at suite start.

use std::io::IsTerminal;

use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize the diagnostics subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_tty = std::io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(is_tty)
                .with_target(true)
                .with_level(true),
        )
        .try_init()?;

    Ok(())
}
