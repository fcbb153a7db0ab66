//! Criteria variants: the closed set of row shapes an econ-model schedule can take.

use econ_core::{AggregatedError, CheckResult, Row, ValidationIssue, row_path};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interval::Interval;
use crate::{dates, flat, period, rate};

pub const FLAT_PROPERTIES: &[&str] = &["entireWellLife"];

pub const PERIOD_PROPERTIES: &[&str] = &[
    "monthPeriod",
    "offsetToFpd",
    "offsetToAsOf",
    "offsetToDiscountDate",
    "offsetToFirstSegment",
    "offsetToEndHistory",
];

pub const DATES_PROPERTIES: &[&str] = &["dates"];

pub const RATE_PROPERTIES: &[&str] = &["waterRate", "oilRate", "gasRate", "totalFluidRate"];

/// Stand-in for an absent value.
pub(crate) static NULL: Value = Value::Null;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaKind {
    Flat,
    Period,
    Dates,
    Rate,
}

impl CriteriaKind {
    /// Registration order; the dispatcher preserves it.
    pub const ALL: [CriteriaKind; 4] = [
        CriteriaKind::Flat,
        CriteriaKind::Period,
        CriteriaKind::Dates,
        CriteriaKind::Rate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CriteriaKind::Flat => "flat",
            CriteriaKind::Period => "period",
            CriteriaKind::Dates => "dates",
            CriteriaKind::Rate => "rate",
        }
    }

    pub fn accepted_properties(self) -> &'static [&'static str] {
        match self {
            CriteriaKind::Flat => FLAT_PROPERTIES,
            CriteriaKind::Period => PERIOD_PROPERTIES,
            CriteriaKind::Dates => DATES_PROPERTIES,
            CriteriaKind::Rate => RATE_PROPERTIES,
        }
    }

    pub fn accepts(self, key: &str) -> bool {
        self.accepted_properties().contains(&key)
    }

    /// Validate and normalize a whole row array with this variant.
    pub fn validate_rows(self, input: RowsInput<'_>) -> Result<Vec<Row>, AggregatedError> {
        match self {
            CriteriaKind::Flat => flat::validate_rows(input),
            CriteriaKind::Period => period::validate_rows(input),
            CriteriaKind::Dates => dates::validate_rows(input),
            CriteriaKind::Rate => rate::validate_rows(input),
        }
    }
}

impl std::fmt::Display for CriteriaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments of one row-array validation.
#[derive(Debug, Clone, Copy)]
pub struct RowsInput<'a> {
    pub rows: &'a [Row],
    /// Path prefix for error locations, e.g. `escalation.rows`.
    pub location: &'a str,
    pub decimal_scale: u32,
}

impl<'a> RowsInput<'a> {
    pub fn new(rows: &'a [Row], location: &'a str, decimal_scale: u32) -> Self {
        Self {
            rows,
            location,
            decimal_scale,
        }
    }
}

/// Discover the active key from the first row; it stays fixed for the array.
pub(crate) fn set_key(kind: CriteriaKind, row: &Row, location: &str) -> CheckResult<&'static str> {
    let accepted = kind.accepted_properties();
    accepted
        .iter()
        .copied()
        .find(|key| row.contains_key(*key))
        .ok_or_else(|| {
            ValidationIssue::unknown_key(
                location,
                format!(
                    "rows key not supported, expected one of: {}",
                    accepted.join(", ")
                ),
            )
        })
}

pub(crate) fn missing_key(location: &str, index: usize, key: &str) -> ValidationIssue {
    ValidationIssue::unknown_key(
        row_path(location, index),
        format!("each row must contain the key `{}`, which is missing", key),
    )
}

/// Raw scalar, or the given field of an already-normalized interval.
pub(crate) fn raw_or_field<'v>(value: &'v Value, field: &str) -> &'v Value {
    match value {
        Value::Object(map) => map.get(field).unwrap_or(&NULL),
        other => other,
    }
}

pub(crate) fn with_interval(row: &Row, key: &str, interval: impl Into<Interval>) -> Row {
    let mut out = row.clone();
    out.insert(key.to_string(), interval.into().to_value());
    out
}
