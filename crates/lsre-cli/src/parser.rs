use std::{fs, path::Path};

use anyhow::{Context, Result};
use lsre_core::Format;
use serde::Deserialize;

use crate::errors::{CliError, ConfigError};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logger: LoggerConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// `tracing` filter directive, e.g. `info` or `lsre_core=debug`.
    pub level: String,
    pub sink: Sink,
    pub json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            sink: Sink::default(),
            json: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub formats: Vec<String>,
}

impl BatchConfig {
    /// Formats named in the config; every format when none are listed.
    pub fn resolve_formats(&self) -> Result<Vec<Format>, CliError> {
        if self.formats.is_empty() {
            return Ok(Format::ALL.to_vec());
        }
        self.formats
            .iter()
            .map(|name| {
                name.parse().map_err(|_| CliError::UnknownFormat {
                    name: name.clone(),
                    origin: "batch.formats".to_string(),
                })
            })
            .collect()
    }
}

pub fn parse_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
