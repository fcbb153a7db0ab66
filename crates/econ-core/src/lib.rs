//! econ-core: shared foundation for econ-model row validation.
//!
//! Contains:
//! - error (validation issues and the aggregated error)
//! - collector (collect-and-continue error accumulation)
//! - location (error path builders like `escalation.rows[2].dates`)
//! - checks (stateless scalar and shape predicates)
//! - numeric (JSON number extraction)

pub mod checks;
pub mod collector;
pub mod error;
pub mod location;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use checks::*;
pub use collector::ErrorCollector;
pub use error::{AggregatedError, CheckResult, IssueKind, ValidationIssue};
pub use location::{field_path, row_path};
pub use numeric::*;

/// One econ-model segment as submitted by a client: string keys to JSON scalars.
pub type Row = serde_json::Map<String, serde_json::Value>;
