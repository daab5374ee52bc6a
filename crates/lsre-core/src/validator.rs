//! Batch validation.
//!
//! A `Validator` holds a set of formats and applies each of them to a slice of
//! values, counting matches, rejections and type errors. Values are checked in
//! parallel; the counts do not depend on the thread pool size.

use rayon::prelude::*;
use tracing::info;

use crate::{format::Format, guard::Argument, results::RuleResult};

#[derive(Debug, Clone, Default)]
pub struct Validator {
    formats: Vec<Format>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that runs every registered format.
    pub fn all_formats() -> Self {
        Self {
            formats: Format::ALL.to_vec(),
        }
    }

    pub fn with_formats(formats: impl IntoIterator<Item = Format>) -> Self {
        let mut validator = Self::new();
        for format in formats {
            validator.add_format(format);
        }
        validator
    }

    /// Adds a format; adding the same format twice is a no-op.
    pub fn add_format(&mut self, format: Format) -> &mut Self {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
        self
    }

    pub fn formats(&self) -> &[Format] {
        self.formats.as_slice()
    }

    /// Applies one format to every value.
    pub fn validate_format<A>(&self, format: Format, values: &[A]) -> RuleResult
    where
        A: Argument + Sync,
    {
        let (matched, type_errors) = values
            .par_iter()
            .map(|value| match format.validate(value) {
                Ok(true) => (1, 0),
                Ok(false) => (0, 0),
                Err(_) => (0, 1),
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        let result = RuleResult::new(format, values.len(), matched, type_errors);
        info!(
            format = format.name(),
            total = result.total,
            matched = result.matched,
            rejected = result.rejected,
            type_errors = result.type_errors,
            "validated batch"
        );
        result
    }

    /// Applies every configured format, in insertion order.
    pub fn validate_all<A>(&self, values: &[A]) -> Vec<RuleResult>
    where
        A: Argument + Sync,
    {
        self.formats
            .iter()
            .map(|format| self.validate_format(*format, values))
            .collect()
    }
}
