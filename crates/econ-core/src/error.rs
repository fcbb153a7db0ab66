use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CheckResult<T> = Result<T, ValidationIssue>;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Row array is not an array of objects, or a row has the wrong number of keys.
    UnsupportedShape,
    /// No accepted property found, or a later row lacks the active key.
    UnknownKey,
    /// Period length, rate threshold or decimal scale out of bounds.
    Range,
    /// A row does not correctly follow the previous one.
    Continuity,
    /// A row matches more than one criteria variant.
    Ambiguous,
    /// Malformed scalar (missing, wrong type, bad date string).
    Value,
}

/// A single violated invariant, located by a dot/bracket path.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{location}: {message}")]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn shape(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::UnsupportedShape, location, message)
    }

    pub fn unknown_key(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::UnknownKey, location, message)
    }

    pub fn range(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Range, location, message)
    }

    pub fn continuity(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Continuity, location, message)
    }

    pub fn value(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Value, location, message)
    }
}

/// Every issue found while validating one payload.
///
/// Produced by [`crate::ErrorCollector::finish`]; never constructed empty by the
/// collector, so holding one always means at least one check failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedError {
    pub issues: Vec<ValidationIssue>,
}

impl AggregatedError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    pub fn locations(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.location.as_str()).collect()
    }

    pub fn count_kind(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }
}

impl std::fmt::Display for AggregatedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.issues.len();
        write!(f, "{} validation error{}", n, if n == 1 { "" } else { "s" })?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregatedError {}

impl From<ValidationIssue> for AggregatedError {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl IntoIterator for AggregatedError {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_display_includes_location() {
        let issue = ValidationIssue::range("escalation.rows[0].waterRate", "too big");
        assert_eq!(format!("{issue}"), "escalation.rows[0].waterRate: too big");
    }

    #[test]
    fn aggregated_display_lists_every_issue() {
        let err = AggregatedError::new(vec![
            ValidationIssue::range("rows[0].monthPeriod", "a"),
            ValidationIssue::continuity("rows[1].monthPeriod", "b"),
        ]);
        let msg = format!("{err}");
        assert!(msg.starts_with("2 validation errors"));
        assert!(msg.contains("rows[0].monthPeriod: a"));
        assert!(msg.contains("rows[1].monthPeriod: b"));
        assert_eq!(err.count_kind(IssueKind::Range), 1);
    }

    #[test]
    fn aggregated_serializes_as_issue_list() {
        let err: AggregatedError = ValidationIssue::unknown_key("rows", "rows key not supported").into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["issues"][0]["kind"], "unknown_key");
        assert_eq!(json["issues"][0]["location"], "rows");
    }
}
