//! econ-model: econ-model document format, loading, and validation.

pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

use econ_core::AggregatedError;
use econ_criteria::CriteriaConfig;

pub use schema::*;
pub use validate::validate_model;

pub const LATEST_VERSION: u32 = 1;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Validation failed: {0}")]
    Validation(#[from] AggregatedError),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Unknown file format: {path} (expected .json, .yaml or .yml)")]
    UnknownFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> ModelResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(ModelError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a model and return it with normalized rows.
pub fn load_yaml(path: &Path, config: &CriteriaConfig) -> ModelResult<EconModel> {
    let content = std::fs::read_to_string(path)?;
    let model: EconModel = serde_yaml::from_str(&content)?;
    validate_model(&model, config)
}

pub fn save_yaml(path: &Path, model: &EconModel, config: &CriteriaConfig) -> ModelResult<()> {
    let normalized = validate_model(model, config)?;
    let content = serde_yaml::to_string(&normalized)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path, config: &CriteriaConfig) -> ModelResult<EconModel> {
    let content = std::fs::read_to_string(path)?;
    let model: EconModel = serde_json::from_str(&content)?;
    validate_model(&model, config)
}

pub fn save_json(path: &Path, model: &EconModel, config: &CriteriaConfig) -> ModelResult<()> {
    let normalized = validate_model(model, config)?;
    let content = serde_json::to_string_pretty(&normalized)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load(path: &Path, config: &CriteriaConfig) -> ModelResult<EconModel> {
    match Format::from_path(path)? {
        Format::Json => load_json(path, config),
        Format::Yaml => load_yaml(path, config),
    }
}

pub fn save(path: &Path, model: &EconModel, config: &CriteriaConfig) -> ModelResult<()> {
    match Format::from_path(path)? {
        Format::Json => save_json(path, model, config),
        Format::Yaml => save_yaml(path, model, config),
    }
}

/// Read a `CriteriaConfig`; missing fields keep their defaults.
pub fn load_config(path: &Path) -> ModelResult<CriteriaConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = match Format::from_path(path)? {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(config)
}
