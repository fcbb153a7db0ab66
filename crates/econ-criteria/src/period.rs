//! Period criteria: consecutive whole-month segments.
//!
//! Each row carries a month count under one of the month-offset keys. The
//! first row starts at month 1 and every following row starts the month after
//! the previous one ends. A row already normalized to `{start, end, period}`
//! is read back through its `period` field, so re-validating normalized rows
//! recomputes the same intervals.

use econ_core::{
    AggregatedError, CheckResult, ErrorCollector, Row, ValidationIssue, field_path,
    is_natural_number, json_number, validate_min_max,
};
use serde_json::Value;
use tracing::debug;

use crate::interval::PeriodInterval;
use crate::variant::{
    CriteriaKind, NULL, RowsInput, missing_key, raw_or_field, set_key, with_interval,
};

pub const MIN_PERIOD: u32 = 1;
pub const MAX_PERIOD: u32 = 1200;

fn validate_number_value(location: &str, key: &str, value: &Value) -> CheckResult<u32> {
    let Some(v) = json_number(value).filter(|v| *v != 0.0) else {
        return Err(ValidationIssue::value(
            location,
            format!("`{}` is required and must be a number larger than 0", key),
        ));
    };
    // Fractions between 0 and 1 fall through to the whole-month check.
    if v < 0.0 || v > MAX_PERIOD as f64 {
        validate_min_max(location, v, MIN_PERIOD as f64, MAX_PERIOD as f64)?;
    }
    if !is_natural_number(v) {
        return Err(ValidationIssue::range(
            location,
            format!("`{}` must be a whole number of months", v),
        ));
    }
    Ok(v as u32)
}

/// Validate one row's period under the active key.
pub fn validate_row(row: &Row, key: &str, location: &str) -> CheckResult<u32> {
    let value = row.get(key).map_or(&NULL, |v| raw_or_field(v, "period"));
    validate_number_value(location, key, value)
}

fn next_interval(
    location: &str,
    previous_end: Option<u32>,
    period: u32,
) -> CheckResult<PeriodInterval> {
    PeriodInterval::following(previous_end, period).ok_or_else(|| {
        ValidationIssue::range(
            location,
            format!(
                "`{}` months after month {} exceeds the largest month index of {}",
                period,
                previous_end.unwrap_or(0),
                u32::MAX
            ),
        )
    })
}

pub fn validate_rows(input: RowsInput<'_>) -> Result<Vec<Row>, AggregatedError> {
    let mut errors = ErrorCollector::new();
    let Some(first) = input.rows.first() else {
        return Ok(Vec::new());
    };
    let Some(key) = errors.catch(|| set_key(CriteriaKind::Period, first, input.location)) else {
        return errors.finish_with(Vec::new());
    };

    let mut out = Vec::with_capacity(input.rows.len());
    let mut previous_end = None;
    for (i, row) in input.rows.iter().enumerate() {
        if !row.contains_key(key) {
            errors.push(missing_key(input.location, i, key));
            out.push(row.clone());
            continue;
        }
        let location = field_path(input.location, i, key);
        let Some(period) = errors.catch(|| validate_row(row, key, &location)) else {
            out.push(row.clone());
            continue;
        };
        match errors.catch(|| next_interval(&location, previous_end, period)) {
            Some(interval) => {
                previous_end = Some(interval.end);
                out.push(with_interval(row, key, interval));
            }
            None => out.push(row.clone()),
        }
    }

    debug!(key, rows = out.len(), "normalized period rows");
    errors.finish_with(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::IssueKind;
    use serde_json::json;

    fn rows(v: Value) -> Vec<Row> {
        serde_json::from_value(v).unwrap()
    }

    fn run(v: Value) -> Result<Vec<Row>, AggregatedError> {
        let input = rows(v);
        validate_rows(RowsInput::new(&input, "rows", 6))
    }

    #[test]
    fn single_row_starts_at_one() {
        let out = run(json!([{"monthPeriod": 5}])).unwrap();
        assert_eq!(
            out[0]["monthPeriod"],
            json!({"start": 1, "end": 5, "period": 5})
        );
    }

    #[test]
    fn consecutive_rows_are_contiguous() {
        let out = run(json!([{"monthPeriod": 6}, {"monthPeriod": 4}])).unwrap();
        assert_eq!(
            out[0]["monthPeriod"],
            json!({"start": 1, "end": 6, "period": 6})
        );
        assert_eq!(
            out[1]["monthPeriod"],
            json!({"start": 7, "end": 10, "period": 4})
        );
    }

    #[test]
    fn offset_keys_are_accepted() {
        let out = run(json!([{"offsetToFpd": 12}, {"offsetToFpd": 1}])).unwrap();
        assert_eq!(out[1]["offsetToFpd"]["start"], 13);
        assert_eq!(out[1]["offsetToFpd"]["end"], 13);
    }

    #[test]
    fn missing_and_zero_values_are_required_errors() {
        let err = run(json!([{"monthPeriod": null}])).unwrap_err();
        assert!(err.issues[0].message.contains("required and must be a number larger than 0"));

        let err = run(json!([{"monthPeriod": 0}])).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::Value);

        let err = run(json!([{"monthPeriod": "6"}])).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::Value);
    }

    #[test]
    fn bounds_and_whole_months() {
        let err = run(json!([{"monthPeriod": -2}])).unwrap_err();
        assert!(err.issues[0].message.contains("less than the minimum of 1"));

        let err = run(json!([{"monthPeriod": 1201}])).unwrap_err();
        assert!(err.issues[0].message.contains("greater than the maximum of 1200"));

        let err = run(json!([{"monthPeriod": 2.5}])).unwrap_err();
        assert!(err.issues[0].message.contains("whole number"));

        assert!(run(json!([{"monthPeriod": 1200}])).is_ok());
    }

    #[test]
    fn fraction_below_one_is_not_a_whole_month() {
        let err = run(json!([{"monthPeriod": 0.5}])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.issues[0].message.contains("whole number of months"));
        assert!(!err.issues[0].message.contains("minimum"));
    }

    #[test]
    fn month_counter_overflow_is_a_range_issue() {
        let issue = next_interval("rows[3].monthPeriod", Some(u32::MAX - 3), 1200).unwrap_err();
        assert_eq!(issue.kind, IssueKind::Range);
        assert_eq!(issue.location, "rows[3].monthPeriod");

        let ok = next_interval("rows[1].monthPeriod", Some(6), 4).unwrap();
        assert_eq!((ok.start, ok.end), (7, 10));
    }

    #[test]
    fn later_row_missing_active_key() {
        let err = run(json!([{"monthPeriod": 6}, {"offsetToAsOf": 4}])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.issues[0].location, "rows[1]");
        assert!(err.issues[0].message.contains("`monthPeriod`, which is missing"));
    }

    #[test]
    fn every_bad_row_is_reported() {
        let err = run(json!([
            {"monthPeriod": 0},
            {"monthPeriod": 3},
            {"monthPeriod": 5000}
        ]))
        .unwrap_err();
        assert_eq!(err.locations(), vec!["rows[0].monthPeriod", "rows[2].monthPeriod"]);
    }

    #[test]
    fn no_accepted_key_on_first_row() {
        let err = run(json!([{"dates": "2022-01-01"}])).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::UnknownKey);
    }

    #[test]
    fn normalized_rows_are_stable() {
        let once = run(json!([{"monthPeriod": 6}, {"monthPeriod": 4}])).unwrap();
        let twice = validate_rows(RowsInput::new(&once, "rows", 6)).unwrap();
        assert_eq!(once, twice);
    }
}
