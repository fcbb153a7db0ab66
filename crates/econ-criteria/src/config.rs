//! Engine configuration.

use serde::{Deserialize, Serialize};

/// What to do when the first row matches more than one criteria variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Run every matched variant in registration order.
    #[default]
    RunAll,
    /// Report the ambiguity as a validation issue.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    /// Maximum digits after the decimal point for rate thresholds.
    pub decimal_scale: u32,
    /// Exact number of keys every row must carry (value key + criteria key).
    pub row_key_count: usize,
    pub ambiguity: AmbiguityPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            decimal_scale: 6,
            row_key_count: 2,
            ambiguity: AmbiguityPolicy::RunAll,
            max_rows: None,
        }
    }
}

impl CriteriaConfig {
    pub fn with_decimal_scale(mut self, decimal_scale: u32) -> Self {
        self.decimal_scale = decimal_scale;
        self
    }

    pub fn strict(mut self) -> Self {
        self.ambiguity = AmbiguityPolicy::Reject;
        self
    }
}
