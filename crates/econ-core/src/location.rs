//! Dot/bracket error paths.

/// `rows` + 2 -> `rows[2]`
pub fn row_path(location: &str, index: usize) -> String {
    format!("{}[{}]", location, index)
}

/// `rows` + 2 + `dates` -> `rows[2].dates`
pub fn field_path(location: &str, index: usize, key: &str) -> String {
    format!("{}[{}].{}", location, index, key)
}
