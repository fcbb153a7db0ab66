use econ_criteria::CriteriaConfig;
use econ_model::schema::*;
use econ_model::{load_config, load_json, load_yaml, save_json, save_yaml, validate_model};
use serde_json::json;

fn escalation_model() -> EconModel {
    EconModel::new("Escalation 3%", ModelKind::Escalation)
        .with_section(
            "escalation",
            json!([
                {"pct_per_year": 3, "dates": "2023-01-01"},
                {"pct_per_year": 2, "dates": "2025-01-01"}
            ]),
        )
        .with_section(
            "cutOff",
            json!([{"criteria": "none", "entireWellLife": "Flat"}]),
        )
}

#[test]
fn roundtrip_yaml_empty_model() {
    let model = EconModel::new("Empty Model", ModelKind::Other);
    let config = CriteriaConfig::default();

    validate_model(&model, &config).unwrap();

    let path = std::env::temp_dir().join("econ_model_roundtrip_empty.yaml");
    save_yaml(&path, &model, &config).unwrap();
    let loaded = load_yaml(&path, &config).unwrap();

    assert_eq!(model, loaded);
}

#[test]
fn roundtrip_json_saves_normalized_rows() {
    let model = escalation_model();
    let config = CriteriaConfig::default();

    let path = std::env::temp_dir().join("econ_model_roundtrip_escalation.json");
    save_json(&path, &model, &config).unwrap();
    let loaded = load_json(&path, &config).unwrap();

    assert_eq!(loaded, validate_model(&model, &config).unwrap());
    assert_eq!(
        loaded.sections["escalation"].rows[0]["dates"],
        json!({"startDate": "2023-01-01", "endDate": "2024-12-31"})
    );
    assert_eq!(loaded.sections["cutOff"].rows[0]["entireWellLife"], "Flat");
}

#[test]
fn roundtrip_yaml_is_stable_after_normalizing() {
    let config = CriteriaConfig::default();
    let path = std::env::temp_dir().join("econ_model_roundtrip_stable.yaml");

    save_yaml(&path, &escalation_model(), &config).unwrap();
    let first = load_yaml(&path, &config).unwrap();
    save_yaml(&path, &first, &config).unwrap();
    let second = load_yaml(&path, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn config_file_overrides_defaults() {
    let path = std::env::temp_dir().join("econ_model_config.yaml");
    std::fs::write(&path, "decimal_scale: 2\nambiguity: reject\n").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.decimal_scale, 2);
    assert_eq!(config.row_key_count, 2);
    assert_eq!(config.ambiguity, econ_criteria::AmbiguityPolicy::Reject);
}
