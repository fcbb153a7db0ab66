//! Variant dispatch: which criteria variants apply to a row array, judged by
//! the keys present on its first row.

use econ_core::{CheckResult, IssueKind, Row, ValidationIssue};
use tracing::{debug, warn};

use crate::config::AmbiguityPolicy;
use crate::variant::CriteriaKind;

/// Every candidate whose accepted properties intersect the row's keys,
/// in candidate order. May hold more than one variant.
pub fn matching_variants(first_row: &Row, candidates: &[CriteriaKind]) -> Vec<CriteriaKind> {
    candidates
        .iter()
        .copied()
        .filter(|kind| first_row.keys().any(|key| kind.accepts(key)))
        .collect()
}

/// Matching variants after applying the ambiguity policy.
pub fn select(
    first_row: &Row,
    location: &str,
    policy: AmbiguityPolicy,
) -> CheckResult<Vec<CriteriaKind>> {
    let matched = matching_variants(first_row, &CriteriaKind::ALL);
    match matched.len() {
        0 => {
            let keys: Vec<&str> = first_row.keys().map(String::as_str).collect();
            Err(ValidationIssue::unknown_key(
                location,
                format!("rows key not supported: {}", keys.join(", ")),
            ))
        }
        1 => {
            debug!(variant = %matched[0], location, "selected criteria variant");
            Ok(matched)
        }
        _ => {
            let names: Vec<&str> = matched.iter().map(|k| k.name()).collect();
            warn!(variants = ?names, location, "row matches more than one criteria variant");
            match policy {
                AmbiguityPolicy::RunAll => Ok(matched),
                AmbiguityPolicy::Reject => Err(ValidationIssue::new(
                    IssueKind::Ambiguous,
                    location,
                    format!("row matches more than one criteria: {}", names.join(", ")),
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn row(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn one_match_per_variant() {
        let cases = [
            (json!({"pct": 1, "entireWellLife": "Flat"}), CriteriaKind::Flat),
            (json!({"pct": 1, "offsetToEndHistory": 3}), CriteriaKind::Period),
            (json!({"pct": 1, "dates": "2022-01-01"}), CriteriaKind::Dates),
            (json!({"pct": 1, "totalFluidRate": 3}), CriteriaKind::Rate),
        ];
        for (r, expected) in cases {
            assert_eq!(matching_variants(&row(r), &CriteriaKind::ALL), vec![expected]);
        }
    }

    #[test]
    fn ambiguous_rows_match_all_in_registration_order() {
        let r = row(json!({"oilRate": 3, "monthPeriod": 2}));
        assert_eq!(
            matching_variants(&r, &CriteriaKind::ALL),
            vec![CriteriaKind::Period, CriteriaKind::Rate]
        );
        assert_eq!(
            select(&r, "rows", AmbiguityPolicy::RunAll).unwrap().len(),
            2
        );
    }

    #[test]
    fn strict_policy_rejects_ambiguity() {
        let r = row(json!({"oilRate": 3, "monthPeriod": 2}));
        let err = select(&r, "rows", AmbiguityPolicy::Reject).unwrap_err();
        assert_eq!(err.kind, IssueKind::Ambiguous);
        assert!(err.message.contains("period, rate"));
    }

    #[test]
    fn candidates_restrict_the_search() {
        let r = row(json!({"oilRate": 3, "monthPeriod": 2}));
        assert_eq!(
            matching_variants(&r, &[CriteriaKind::Rate]),
            vec![CriteriaKind::Rate]
        );
    }

    #[test]
    fn no_match_is_unknown_key() {
        let r = row(json!({"pct": 1, "weeks": 4}));
        let err = select(&r, "capex.rows", AmbiguityPolicy::RunAll).unwrap_err();
        assert_eq!(err.kind, IssueKind::UnknownKey);
        assert_eq!(err.location, "capex.rows");
    }
}
