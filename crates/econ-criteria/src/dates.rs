//! Dates criteria: consecutive calendar segments keyed by first-of-month dates.

use chrono::{Datelike, Months, NaiveDate};
use econ_core::{AggregatedError, CheckResult, ErrorCollector, Row, ValidationIssue, field_path};
use serde_json::Value;
use tracing::debug;

use crate::interval::{DateEnd, DateInterval};
use crate::variant::{NULL, RowsInput, missing_key, raw_or_field, with_interval};

pub const DATES_KEY: &str = "dates";

/// Latest start date a row may carry.
pub fn max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2262, 4, 1).unwrap_or(NaiveDate::MAX)
}

fn is_iso_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

pub fn validate_date_value(location: &str, value: &Value) -> CheckResult<NaiveDate> {
    let s = match value.as_str() {
        Some(s) if !s.is_empty() => s,
        _ => {
            return Err(ValidationIssue::value(
                location,
                format!("`{}` is required and must be a YYYY-MM-DD date", DATES_KEY),
            ));
        }
    };
    let date = if is_iso_shape(s) {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    } else {
        None
    }
    .ok_or_else(|| {
        ValidationIssue::value(location, format!("`{}` is not a valid YYYY-MM-DD date", s))
    })?;

    let max = max_date();
    if date > max {
        return Err(ValidationIssue::range(
            location,
            format!("`{}` is later than the maximum date of {}", s, max),
        ));
    }
    if date.day() > 1 {
        return Err(ValidationIssue::value(
            location,
            format!("`{}` must fall on the first day of a month", s),
        ));
    }
    Ok(date)
}

pub fn validate_row(row: &Row, location: &str) -> CheckResult<NaiveDate> {
    let value = row
        .get(DATES_KEY)
        .map_or(&NULL, |v| raw_or_field(v, "startDate"));
    validate_date_value(location, value)
}

pub fn validate_rows(input: RowsInput<'_>) -> Result<Vec<Row>, AggregatedError> {
    let mut errors = ErrorCollector::new();
    let location = input.location;

    let starts: Vec<Option<NaiveDate>> = input
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.contains_key(DATES_KEY) {
                errors.push(missing_key(location, i, DATES_KEY));
                return None;
            }
            errors.catch(|| validate_row(row, &field_path(location, i, DATES_KEY)))
        })
        .collect();

    let mut out = Vec::with_capacity(input.rows.len());
    for (i, row) in input.rows.iter().enumerate() {
        let Some(start) = starts[i] else {
            out.push(row.clone());
            continue;
        };
        let end_date = match starts.get(i + 1) {
            None => DateEnd::EconLimit,
            Some(None) => {
                out.push(row.clone());
                continue;
            }
            Some(Some(next)) => {
                let earliest = start.checked_add_months(Months::new(1));
                if earliest.is_none_or(|earliest| *next < earliest) {
                    errors.push(ValidationIssue::continuity(
                        field_path(location, i + 1, DATES_KEY),
                        format!(
                            "`{}` must be at least one month after the previous row ({})",
                            next, start
                        ),
                    ));
                    out.push(row.clone());
                    continue;
                }
                match next.pred_opt() {
                    Some(day_before) => DateEnd::Date(day_before),
                    None => DateEnd::EconLimit,
                }
            }
        };
        out.push(with_interval(
            row,
            DATES_KEY,
            DateInterval {
                start_date: start,
                end_date,
            },
        ));
    }

    debug!(rows = out.len(), "normalized dates rows");
    errors.finish_with(out)
}
