//! Model validation logic.

use econ_core::{ErrorCollector, ValidationIssue};
use econ_criteria::{CriteriaConfig, RowValidator, rows_to_value};
use tracing::debug;

use crate::schema::EconModel;
use crate::{LATEST_VERSION, ModelError, ModelResult};

/// Validate every row section and return the model with normalized rows.
///
/// Issues from all sections are reported together; nothing is returned
/// unless the whole document is valid.
pub fn validate_model(model: &EconModel, config: &CriteriaConfig) -> ModelResult<EconModel> {
    if model.version > LATEST_VERSION {
        return Err(ModelError::UnsupportedVersion {
            version: model.version,
        });
    }

    let mut errors = ErrorCollector::new();
    if model.name.trim().is_empty() {
        errors.push(ValidationIssue::value("name", "model name must not be empty"));
    }

    let validator = RowValidator::new(config.clone());
    let mut normalized = model.clone();
    for (name, section) in normalized.sections.iter_mut() {
        let location = format!("{}.rows", name);
        if let Some(rows) = errors.catch_all(|| validator.validate(&section.rows, &location)) {
            section.rows = rows_to_value(rows);
        }
    }

    debug!(model = %model.name, sections = model.sections.len(), issues = errors.len(), "validated model");
    Ok(errors.finish_with(normalized)?)
}
