//! Flat (whole well life) criteria: a single row whose value is literally `"Flat"`.

use econ_core::{AggregatedError, CheckResult, ErrorCollector, Row, ValidationIssue, field_path};

use crate::variant::{FLAT_PROPERTIES, RowsInput};

pub const FLAT_KEY: &str = "entireWellLife";
pub const FLAT_VALUE: &str = "Flat";

pub fn validate_row(row: &Row, location: &str) -> CheckResult<()> {
    match row.get(FLAT_KEY).and_then(|v| v.as_str()) {
        Some(FLAT_VALUE) => Ok(()),
        _ => Err(ValidationIssue::value(
            location,
            format!("`{}` must be \"{}\"", FLAT_KEY, FLAT_VALUE),
        )),
    }
}

/// No interval rewrite happens for this variant; rows come back unchanged.
pub fn validate_rows(input: RowsInput<'_>) -> Result<Vec<Row>, AggregatedError> {
    let mut errors = ErrorCollector::new();

    if input.rows.len() > 1 {
        errors.push(ValidationIssue::shape(
            input.location,
            format!(
                "only one row allowed with this property: {}",
                FLAT_PROPERTIES.join(", ")
            ),
        ));
    }
    if let Some(first) = input.rows.first() {
        errors.catch(|| validate_row(first, &field_path(input.location, 0, FLAT_KEY)));
    }

    errors.finish_with(input.rows.to_vec())
}
