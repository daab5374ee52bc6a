use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown format '{name}' in {origin}. Run `lsre list` for the supported formats")]
    UnknownFormat { name: String, origin: String },
    #[error("Batch input '{path}' must contain a JSON array, found {found}")]
    InputNotArray { path: String, found: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Invalid log level '{level}': {message}")]
    InvalidLogLevel { level: String, message: String },
}
