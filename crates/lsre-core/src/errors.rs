use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The validator received something other than a string
    #[error("Argument 'text' must be of type {expected}, got {actual}")]
    InvalidArgumentType {
        expected: &'static str,
        actual: &'static str,
    },

    /// No format is registered under this name
    #[error("Unknown format '{0}'")]
    UnknownFormat(String),
}
