//! Application Runner Module
//!
//! Shared entry point: logging setup plus the tokio runtime that hosts the
//! TUI event loop.

use std::fs::File;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Shared application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
}

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or the event loop
/// fails.
pub fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    // The TUI owns the terminal, so logs go to a file
    let log_file = File::create("/tmp/popchat.log")?;
    let default_filter = if config.verbose {
        "trace"
    } else if config.debug {
        "debug"
    } else {
        "info,popchat=debug"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { crate::tui::run(Settings::default()).await })
}
