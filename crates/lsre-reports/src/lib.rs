pub mod formatters;
pub mod utils;

use lsre_core::{Format, RuleResult};
use serde::Serialize;

pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Placeholder written instead of values of sensitive formats.
pub const REDACTED: &str = "<redacted>";

/// Result of checking one value against one format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRecord {
    pub format: Format,
    pub value: String,
    pub matched: bool,
}

impl CheckRecord {
    pub fn new(format: Format, value: &str, matched: bool) -> Self {
        let value = if format.is_sensitive() {
            REDACTED.to_string()
        } else {
            value.to_string()
        };
        Self {
            format,
            value,
            matched,
        }
    }
}

pub trait Reporter {
    fn on_start(&self);
    fn on_check(&mut self, record: CheckRecord);
    fn on_batch_result(&mut self, result: &RuleResult);
    fn on_summary(&self, passed: usize, failed: usize);
}
