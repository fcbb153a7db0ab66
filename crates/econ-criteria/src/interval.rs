//! Normalized intervals written back into a row in place of its raw scalar.

use chrono::NaiveDate;
use econ_core::Real;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Open end of the last rate interval.
pub const RATE_OPEN_END: &str = "inf";
/// Open end of the last dates interval.
pub const DATES_OPEN_END: &str = "Econ Limit";

/// Rate threshold; integral values serialize as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub Real);

impl Serialize for Threshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < 9.0e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodInterval {
    pub start: u32,
    pub end: u32,
    pub period: u32,
}

impl PeriodInterval {
    /// Interval of `period` months starting right after `previous_end`.
    ///
    /// `None` when the month counter would overflow `u32`.
    pub fn following(previous_end: Option<u32>, period: u32) -> Option<Self> {
        let start = match previous_end {
            Some(end) => end.checked_add(1)?,
            None => 1,
        };
        let end = start.checked_add(period.checked_sub(1)?)?;
        Some(Self { start, end, period })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateEnd {
    Value(Threshold),
    Inf,
}

impl Serialize for RateEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RateEnd::Value(t) => t.serialize(serializer),
            RateEnd::Inf => serializer.serialize_str(RATE_OPEN_END),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateInterval {
    pub start: Threshold,
    pub end: RateEnd,
}

impl RateInterval {
    pub fn new(start: Real, next_start: Option<Real>) -> Self {
        Self {
            start: Threshold(start),
            end: next_start.map_or(RateEnd::Inf, |n| RateEnd::Value(Threshold(n))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateEnd {
    Date(NaiveDate),
    EconLimit,
}

impl Serialize for DateEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateEnd::Date(d) => d.serialize(serializer),
            DateEnd::EconLimit => serializer.serialize_str(DATES_OPEN_END),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInterval {
    pub start_date: NaiveDate,
    pub end_date: DateEnd,
}

/// Any interval, ready to be embedded into a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Interval {
    Period(PeriodInterval),
    Rate(RateInterval),
    Dates(DateInterval),
}

impl Interval {
    pub fn to_value(&self) -> Value {
        // Plain structs with string keys: serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<PeriodInterval> for Interval {
    fn from(i: PeriodInterval) -> Self {
        Interval::Period(i)
    }
}

impl From<RateInterval> for Interval {
    fn from(i: RateInterval) -> Self {
        Interval::Rate(i)
    }
}

impl From<DateInterval> for Interval {
    fn from(i: DateInterval) -> Self {
        Interval::Dates(i)
    }
}
