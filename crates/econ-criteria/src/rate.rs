//! Rate criteria: ascending numeric thresholds on a water, oil, gas or
//! total-fluid rate. Each row's interval ends where the next row's begins; the
//! last one is open-ended (`"inf"`).

use econ_core::{
    AggregatedError, CheckResult, ErrorCollector, Real, Row, ValidationIssue, field_path,
    json_number, validate_decimal_scale, validate_min_max,
};
use serde_json::Value;
use tracing::debug;

use crate::interval::RateInterval;
use crate::variant::{
    CriteriaKind, NULL, RowsInput, missing_key, raw_or_field, set_key, with_interval,
};

pub const MIN_RATE: Real = 0.0;
pub const MAX_RATE: Real = 10_000_000_000.0;

fn threshold(row: &Row, key: &str) -> Option<Real> {
    row.get(key).and_then(|v| json_number(raw_or_field(v, "start")))
}

pub fn validate_rate_value(
    location: &str,
    key: &str,
    value: &Value,
    decimal_scale: u32,
) -> CheckResult<Real> {
    let Some(v) = json_number(value) else {
        return Err(ValidationIssue::value(
            location,
            format!("`{}` is required and must be a number", key),
        ));
    };
    validate_min_max(location, v, MIN_RATE, MAX_RATE)?;
    validate_decimal_scale(decimal_scale, location, v)?;
    Ok(v)
}

pub fn validate_row(row: &Row, key: &str, location: &str, decimal_scale: u32) -> CheckResult<Real> {
    let value = row.get(key).map_or(&NULL, |v| raw_or_field(v, "start"));
    validate_rate_value(location, key, value, decimal_scale)
}

pub fn validate_rows(input: RowsInput<'_>) -> Result<Vec<Row>, AggregatedError> {
    let mut errors = ErrorCollector::new();
    let Some(first) = input.rows.first() else {
        return Ok(Vec::new());
    };
    let Some(key) = errors.catch(|| set_key(CriteriaKind::Rate, first, input.location)) else {
        return errors.finish_with(Vec::new());
    };

    let mut out = Vec::with_capacity(input.rows.len());
    for (i, row) in input.rows.iter().enumerate() {
        if !row.contains_key(key) {
            errors.push(missing_key(input.location, i, key));
            out.push(row.clone());
            continue;
        }
        let location = field_path(input.location, i, key);
        let current = threshold(row, key);
        let next_row = input.rows.get(i + 1);
        let next = next_row.and_then(|r| threshold(r, key));

        if let (Some(current), Some(next)) = (current, next)
            && next < current + 1.0
        {
            errors.push(ValidationIssue::continuity(
                field_path(input.location, i + 1, key),
                format!(
                    "`{}` must be greater than the value in the previous row ({})",
                    next, current
                ),
            ));
            out.push(row.clone());
            continue;
        }

        match errors.catch(|| validate_row(row, key, &location, input.decimal_scale)) {
            // A next row without a usable threshold reports its own issue.
            Some(start) if next_row.is_none() || next.is_some() => {
                out.push(with_interval(row, key, RateInterval::new(start, next)));
            }
            _ => out.push(row.clone()),
        }
    }

    debug!(key, rows = out.len(), "normalized rate rows");
    errors.finish_with(out)
}
