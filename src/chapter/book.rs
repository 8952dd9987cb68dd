//! Chapter → book label mapping

use super::key::normalize_chapter_key;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::info;

/// A book label, stored in its string form.
///
/// Labels may be strings or numbers in the source data; both are compared
/// as case-insensitive strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookLabel(String);

impl BookLabel {
    /// Convert a raw JSON label. `null` maps to the empty label.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self(String::new()),
            Value::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a requested book
    pub fn matches(&self, book: &str) -> bool {
        self.0.to_lowercase() == book.to_lowercase()
    }
}

impl From<&str> for BookLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BookLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for BookLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which book each chapter belongs to
#[derive(Debug, Clone, Default)]
pub struct BookMapping {
    labels: HashMap<String, BookLabel>,
}

impl BookMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw snapshot object, rewriting bare integer keys to chapter keys
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut mapping = Self::new();
        for (key, value) in raw {
            mapping.insert(key, BookLabel::from_value(value));
        }
        info!(chapters = mapping.len(), "loaded chapter-to-book mapping");
        mapping
    }

    /// Map a chapter (or bare chapter number) to a book
    pub fn insert(&mut self, key: &str, label: impl Into<BookLabel>) {
        self.labels.insert(normalize_chapter_key(key), label.into());
    }

    /// Book label of a chapter, or `""` when unmapped
    pub fn lookup(&self, chapter_key: &str) -> &str {
        self.labels
            .get(chapter_key)
            .map(BookLabel::as_str)
            .unwrap_or("")
    }

    /// Whether a chapter belongs to the requested book
    pub fn is_in_book(&self, chapter_key: &str, book: &str) -> bool {
        match self.labels.get(chapter_key) {
            Some(label) => label.matches(book),
            None => book.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
