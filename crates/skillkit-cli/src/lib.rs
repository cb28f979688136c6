//! Shared setup and progress rendering for the skill binaries.

pub mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use skillkit_config::InitConfig;

/// Initialize tracing on stderr so stdout carries only user-facing output.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Parse command-line arguments.
///
/// Usage errors print clap's message and map to exit code 1; `--help` and
/// `--version` print and map to 0.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Template defaults for `init-skill` from the user config.
///
/// A missing config file yields defaults silently; an unreadable one is
/// logged and also falls back to defaults.
pub fn load_init_defaults() -> InitConfig {
    match skillkit_config::load_config().context("Failed to load skillkit config") {
        Ok(config) => config.init,
        Err(e) => {
            tracing::warn!("{e:#}; using built-in defaults");
            InitConfig::default()
        }
    }
}
