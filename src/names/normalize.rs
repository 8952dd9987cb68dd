//! Whitespace normalization for raw character names

/// Trim a raw name and collapse every internal whitespace run to one space.
///
/// Empty input yields an empty string. Punctuation is left untouched.
pub fn clean_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
