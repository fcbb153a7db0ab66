//! Row-array entry point used by the econ-model field layer.

use econ_core::{
    AggregatedError, CheckResult, ErrorCollector, Row, ValidationIssue, row_path,
    validate_key_length,
};
use serde_json::Value;
use tracing::debug;

use crate::config::CriteriaConfig;
use crate::dispatch;
use crate::variant::RowsInput;

/// Validates and normalizes client-submitted row arrays.
///
/// Holds configuration only; every call gets its own state, so one validator
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RowValidator {
    config: CriteriaConfig,
}

impl RowValidator {
    pub fn new(config: CriteriaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CriteriaConfig {
        &self.config
    }

    /// Validate a raw JSON payload; returns the normalized rows or every issue found.
    pub fn validate(&self, raw: &Value, location: &str) -> Result<Vec<Row>, AggregatedError> {
        let rows = as_row_array(raw, location)?;
        self.validate_rows(&rows, location)
    }

    pub fn validate_rows(&self, rows: &[Row], location: &str) -> Result<Vec<Row>, AggregatedError> {
        let Some(first) = rows.first() else {
            return Err(ValidationIssue::shape(location, "rows must contain at least one row").into());
        };
        if let Some(max) = self.config.max_rows
            && rows.len() > max
        {
            return Err(ValidationIssue::shape(
                location,
                format!("at most {} rows are allowed, found {}", max, rows.len()),
            )
            .into());
        }

        let mut errors = ErrorCollector::new();
        for (i, row) in rows.iter().enumerate() {
            errors.catch(|| {
                validate_key_length(row, &row_path(location, i), self.config.row_key_count)
            });
        }

        let variants = errors
            .catch(|| dispatch::select(first, location, self.config.ambiguity))
            .unwrap_or_default();

        let mut current = rows.to_vec();
        for kind in variants {
            let input = RowsInput::new(&current, location, self.config.decimal_scale);
            if let Some(normalized) = errors.catch_all(|| kind.validate_rows(input)) {
                current = normalized;
            }
        }

        debug!(location, rows = current.len(), issues = errors.len(), "validated row array");
        errors.finish_with(current)
    }
}

/// Validate `raw` at `location` with the default configuration and the given scale.
pub fn validate_rows(
    raw: &Value,
    location: &str,
    decimal_scale: u32,
) -> Result<Vec<Row>, AggregatedError> {
    RowValidator::new(CriteriaConfig::default().with_decimal_scale(decimal_scale))
        .validate(raw, location)
}

pub fn as_row_array(raw: &Value, location: &str) -> CheckResult<Vec<Row>> {
    let unsupported = || ValidationIssue::shape(location, "rows must be an array of objects");
    let items = raw.as_array().ok_or_else(unsupported)?;
    items
        .iter()
        .map(|item| item.as_object().cloned().ok_or_else(unsupported))
        .collect()
}

pub fn rows_to_value(rows: Vec<Row>) -> Value {
    Value::Array(rows.into_iter().map(Value::Object).collect())
}
