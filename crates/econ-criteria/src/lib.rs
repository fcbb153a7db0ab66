//! econ-criteria: row-criteria validation and interval normalization for
//! econ-model schedules.
//!
//! A row array is dispatched on its first row's keys to one of four criteria
//! variants (flat, period, dates, rate). The matched variant checks every row,
//! rewrites each row's scalar into a contiguous interval and reports every
//! violation it finds in a single [`econ_core::AggregatedError`].

pub mod config;
pub mod dates;
pub mod dispatch;
pub mod flat;
pub mod interval;
pub mod period;
pub mod rate;
pub mod rows;
pub mod variant;

pub use config::{AmbiguityPolicy, CriteriaConfig};
pub use dispatch::{matching_variants, select};
pub use interval::{
    DATES_OPEN_END, DateEnd, DateInterval, Interval, PeriodInterval, RATE_OPEN_END, RateEnd,
    RateInterval, Threshold,
};
pub use rows::{RowValidator, as_row_array, rows_to_value, validate_rows};
pub use variant::{CriteriaKind, RowsInput};
