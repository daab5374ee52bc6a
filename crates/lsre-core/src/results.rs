use serde::Serialize;

use crate::format::Format;

/// Outcome of one format applied to a batch of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleResult {
    pub format: Format,
    pub total: usize,
    pub matched: usize,
    pub rejected: usize,
    pub type_errors: usize,
}

impl RuleResult {
    /// `rejected` is whatever `total` leaves after matches and type errors,
    /// floored at zero.
    pub fn new(format: Format, total: usize, matched: usize, type_errors: usize) -> Self {
        Self {
            format,
            total,
            matched,
            rejected: total.saturating_sub(matched).saturating_sub(type_errors),
            type_errors,
        }
    }

    /// Share of values that did not match, as a percentage of `total`.
    pub fn error_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.rejected + self.type_errors) as f64 / self.total as f64 * 100.0
    }

    pub fn is_passed(&self) -> bool {
        self.rejected == 0 && self.type_errors == 0
    }
}
