use lsre_core::RuleResult;

use crate::{utils::numbers::abbreviate_count, CheckRecord, Reporter};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("lsre v{} - Format Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn format_check(record: &CheckRecord) -> String {
        let status = if record.matched { "MATCH" } else { "NO MATCH" };
        format!("  {:<8} {} {}", status, record.format, record.value)
    }

    pub fn format_batch_result(result: &RuleResult) -> String {
        let name = result.format.name();
        let dots = ".".repeat(20usize.saturating_sub(name.len()));
        let status = if result.is_passed() {
            "PASSED"
        } else {
            "FAILED"
        };
        format!(
            "  {} {} {:>6} matched, {:>6} rejected, {:>6} type errors ({:.2}%) - {}",
            name,
            dots,
            abbreviate_count(result.matched),
            abbreviate_count(result.rejected),
            abbreviate_count(result.type_errors),
            result.error_percentage(),
            status
        )
    }

    pub fn print_summary(&self, passed: usize, failed: usize) {
        println!("\n===================================");
        println!("Result: {} failed, {} passed", failed, passed);
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_check(&mut self, record: CheckRecord) {
        println!("{}", Self::format_check(&record));
    }

    fn on_batch_result(&mut self, result: &RuleResult) {
        println!("{}", Self::format_batch_result(result));
    }

    fn on_summary(&self, passed: usize, failed: usize) {
        self.print_summary(passed, failed);
    }
}
