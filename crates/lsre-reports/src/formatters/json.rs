use chrono::Local;
use lsre_core::RuleResult;
use serde::Serialize;
use serde_json::Error;

use crate::{CheckRecord, Reporter};

#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    checks: Vec<CheckRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    batch: Vec<BatchFormatter>,
}

#[derive(Serialize)]
struct BatchFormatter {
    #[serde(flatten)]
    result: RuleResult,
    error_percent: f64,
    pass: bool,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            checks: Vec::new(),
            batch: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_check(&mut self, record: CheckRecord) {
        self.checks.push(record);
    }

    fn on_batch_result(&mut self, result: &RuleResult) {
        self.batch.push(BatchFormatter {
            result: result.clone(),
            error_percent: result.error_percentage(),
            pass: result.is_passed(),
        });
    }

    fn on_summary(&self, _passed: usize, _failed: usize) {}
}
