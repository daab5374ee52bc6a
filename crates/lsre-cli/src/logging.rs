use std::io;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::{
    errors::ConfigError,
    parser::{LoggerConfig, Sink},
};

/// Environment variable holding a filter directive; overrides flags and config.
pub const LOG_ENV: &str = "LSRE_LOG";

pub fn init(config: &LoggerConfig, debug: bool) -> Result<()> {
    let filter = build_filter(config, debug, std::env::var(LOG_ENV).ok())?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match (config.sink, config.json) {
        (Sink::Stderr, false) => builder.with_writer(io::stderr).try_init(),
        (Sink::Stderr, true) => builder.json().with_writer(io::stderr).try_init(),
        (Sink::Stdout, false) => builder.with_writer(io::stdout).try_init(),
        (Sink::Stdout, true) => builder.json().with_writer(io::stdout).try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install logger: {e}"))
}

/// Picks the filter directive: environment, then `--debug`, then config.
pub fn build_filter(
    config: &LoggerConfig,
    debug: bool,
    env: Option<String>,
) -> Result<EnvFilter, ConfigError> {
    let level = match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if debug => "debug".to_string(),
        _ => config.level.clone(),
    };

    EnvFilter::try_new(&level).map_err(|e| ConfigError::InvalidLogLevel {
        message: e.to_string(),
        level,
    })
}
