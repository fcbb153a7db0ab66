use serde_json::Value;

/// Floating point type used for every row scalar
pub type Real = f64;

/// Finite JSON number, or `None` for anything else (strings, null, bools).
pub fn json_number(value: &Value) -> Option<Real> {
    value.as_f64().filter(|v| v.is_finite())
}
