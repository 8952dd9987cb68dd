//! Chapter key parsing

use regex_lite::Regex;
use std::sync::OnceLock;

fn trailing_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)$").expect("trailing digit pattern is valid"))
}

/// Ordinal encoded by a chapter key's trailing digits.
///
/// `"Chapter 12"` → `Some(12)`. Keys without trailing digits (or with a
/// number too large to represent) have no ordinal; they sort before every
/// numbered chapter and are dropped by any numeric range filter.
pub fn chapter_ordinal(key: &str) -> Option<u64> {
    trailing_digits()
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Canonical key for chapter number `n`
pub fn chapter_key(n: i64) -> String {
    format!("Chapter {}", n)
}

/// Rewrite a bare integer key (`"12"`) to its chapter key; other keys pass through.
pub fn normalize_chapter_key(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(n) => chapter_key(n),
        Err(_) => raw.to_string(),
    }
}
