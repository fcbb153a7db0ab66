//! Collect-and-continue error accumulation.
//!
//! Every check in a row-array validation runs through one collector so a
//! single response can report every problem instead of the first one.

use crate::error::{AggregatedError, CheckResult, ValidationIssue};

#[derive(Debug, Default)]
pub struct ErrorCollector {
    issues: Vec<ValidationIssue>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `check`; on failure record the issue and keep going.
    pub fn catch<T>(&mut self, check: impl FnOnce() -> CheckResult<T>) -> Option<T> {
        match check() {
            Ok(value) => Some(value),
            Err(issue) => {
                self.issues.push(issue);
                None
            }
        }
    }

    /// Like [`catch`](Self::catch) for operations that already aggregate.
    pub fn catch_all<T>(
        &mut self,
        op: impl FnOnce() -> Result<T, AggregatedError>,
    ) -> Option<T> {
        match op() {
            Ok(value) => Some(value),
            Err(err) => {
                self.absorb(err);
                None
            }
        }
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn absorb(&mut self, err: AggregatedError) {
        self.issues.extend(err.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Raise everything collected, or succeed if nothing was.
    pub fn finish(self) -> Result<(), AggregatedError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(AggregatedError::new(self.issues))
        }
    }

    pub fn finish_with<T>(self, value: T) -> Result<T, AggregatedError> {
        self.finish().map(|()| value)
    }
}
