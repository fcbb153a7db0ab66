//! Econ-model document definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconModel {
    pub version: u32,
    pub name: String,
    pub kind: ModelKind,
    /// Row sections keyed by field name (`escalation`, `cutOff`, ...).
    #[serde(default)]
    pub sections: BTreeMap<String, SectionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Capex,
    Escalation,
    DatesSetting,
    CutOff,
    Pricing,
    Differentials,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw client rows; normalized in place of the input after validation.
    pub rows: serde_json::Value,
}

impl SectionDef {
    pub fn new(rows: serde_json::Value) -> Self {
        Self {
            description: None,
            rows,
        }
    }
}

impl EconModel {
    pub fn new(name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            kind,
            sections: BTreeMap::new(),
        }
    }

    pub fn with_section(mut self, name: impl Into<String>, rows: serde_json::Value) -> Self {
        self.sections.insert(name.into(), SectionDef::new(rows));
        self
    }
}
