//! Free-text normalization for categorical fields

/// Trim and re-case a manufacturer name: first character upper, rest lower.
///
/// Keeps "TOYOTA", "toyota" and " Toyota " on the same model category.
pub fn normalize_company(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Trim surrounding whitespace from a categorical value, keeping its case
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_string()
}
