//! Stateless scalar and shape checks shared by every criteria variant.

use crate::Row;
use crate::error::{CheckResult, ValidationIssue};
use crate::numeric::Real;

pub fn validate_min_max(location: &str, value: Real, min: Real, max: Real) -> CheckResult<()> {
    if value < min {
        return Err(ValidationIssue::range(
            location,
            format!("`{}` is less than the minimum of {}", value, min),
        ));
    }
    if value > max {
        return Err(ValidationIssue::range(
            location,
            format!("`{}` is greater than the maximum of {}", value, max),
        ));
    }
    Ok(())
}

/// Digits after the decimal point. `Display` for `f64` never uses exponent
/// notation, so `1.5e-7` renders as `0.00000015` and has a scale of 8.
pub fn decimal_scale(value: Real) -> u32 {
    format!("{}", value.abs())
        .split_once('.')
        .map_or(0, |(_, frac)| frac.len() as u32)
}

pub fn validate_decimal_scale(max_scale: u32, location: &str, value: Real) -> CheckResult<()> {
    let scale = decimal_scale(value);
    if scale > max_scale {
        return Err(ValidationIssue::range(
            location,
            format!(
                "`{}` has {} digits after the decimal point, more than the maximum of {}",
                value, scale, max_scale
            ),
        ));
    }
    Ok(())
}

/// Rejects rows carrying extraneous or missing properties.
pub fn validate_key_length(row: &Row, location: &str, expected: usize) -> CheckResult<()> {
    if row.len() != expected {
        return Err(ValidationIssue::shape(
            location,
            format!(
                "row must have exactly {} properties, found {}",
                expected,
                row.len()
            ),
        ));
    }
    Ok(())
}

pub fn is_natural_number(value: Real) -> bool {
    value.is_finite() && value > 0.0 && value.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IssueKind;
    use serde_json::json;

    #[test]
    fn min_max_reports_each_side() {
        assert!(validate_min_max("x", 5.0, 0.0, 10.0).is_ok());
        assert!(validate_min_max("x", 0.0, 0.0, 10.0).is_ok());

        let low = validate_min_max("x", -1.0, 0.0, 10.0).unwrap_err();
        assert!(low.message.contains("less than the minimum of 0"));
        assert_eq!(low.kind, IssueKind::Range);

        let high = validate_min_max("x", 1201.0, 1.0, 1200.0).unwrap_err();
        assert!(high.message.contains("greater than the maximum of 1200"));
    }

    #[test]
    fn decimal_scale_counts_fraction_digits() {
        assert_eq!(decimal_scale(5.0), 0);
        assert_eq!(decimal_scale(2.5), 1);
        assert_eq!(decimal_scale(-0.125), 3);
        assert_eq!(decimal_scale(1e-7), 7);
        assert_eq!(decimal_scale(1.5e-7), 8);
        assert_eq!(decimal_scale(1e21), 0);
    }

    #[test]
    fn scientific_inputs_render_in_plain_decimal() {
        let tiny: Real = "2.5E-9".parse().unwrap();
        assert_eq!(format!("{}", tiny), "0.0000000025");
        assert_eq!(decimal_scale(tiny), 10);
    }

    #[test]
    fn decimal_scale_limit() {
        assert!(validate_decimal_scale(6, "x", 0.123456).is_ok());
        let err = validate_decimal_scale(6, "x", 0.1234567).unwrap_err();
        assert!(err.message.contains("maximum of 6"));
    }

    #[test]
    fn key_length_exact() {
        let row = json!({"escalation_value": 2, "monthPeriod": 5});
        let row = row.as_object().unwrap();
        assert!(validate_key_length(row, "rows[0]", 2).is_ok());

        let err = validate_key_length(row, "rows[0]", 1).unwrap_err();
        assert_eq!(err.kind, IssueKind::UnsupportedShape);
        assert!(err.message.contains("found 2"));
    }

    #[test]
    fn natural_numbers() {
        assert!(is_natural_number(1.0));
        assert!(is_natural_number(1200.0));
        assert!(!is_natural_number(0.0));
        assert!(!is_natural_number(-3.0));
        assert!(!is_natural_number(2.5));
        assert!(!is_natural_number(Real::NAN));
    }
}
