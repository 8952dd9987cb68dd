//! AliasIndex: case-insensitive alias → canonical name lookup

use super::normalize::clean_name;
use crate::de::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::info;

/// One character identity and the spellings that refer to it.
///
/// Fields other than `canonical_name` and `aliases` are kept so the alias
/// snapshot can be served back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub canonical_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AliasEntry {
    /// Create an entry from a canonical name and its aliases
    pub fn new<I, S>(canonical_name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canonical_name: canonical_name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

/// Mapping from lowercased alias to canonical name.
///
/// Collisions are last-write-wins: entries are applied in input order and a
/// later entry claiming an alias silently replaces the earlier mapping.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    map: HashMap<String, String>,
}

impl AliasIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from alias entries in order
    pub fn from_entries(entries: &[AliasEntry]) -> Self {
        let mut index = Self::new();
        index.load(entries);
        index
    }

    /// Add every alias of every entry, plus each canonical name mapped to itself.
    ///
    /// An entry whose canonical name is blank still maps its aliases, to
    /// `""`, so those spellings resolve to no character. Only the
    /// self-mapping is skipped for it.
    pub fn load(&mut self, entries: &[AliasEntry]) {
        for entry in entries {
            let canonical = entry.canonical_name.trim();
            for alias in &entry.aliases {
                self.map
                    .insert(alias.trim().to_lowercase(), canonical.to_string());
            }
            if !canonical.is_empty() {
                self.map.insert(canonical.to_lowercase(), canonical.to_string());
            }
        }
        info!(
            entries = entries.len(),
            keys = self.map.len(),
            "loaded alias entries"
        );
    }

    /// Exact lookup of an already-lowercased key
    pub fn resolve(&self, lowercased_key: &str) -> Option<&str> {
        self.map.get(lowercased_key).map(String::as_str)
    }

    /// Resolve a raw name to its canonical form.
    ///
    /// Looks up the trimmed, lowercased name. A hit is returned as is, even
    /// when it is `""`. On a miss the whitespace-collapsed key is tried
    /// before falling back to [`clean_name`]. This second lookup goes beyond
    /// a plain "unknown name → cleaned name" fallback: `"Mr.  Casaubon"`
    /// resolves through the alias `"mr. casaubon"` instead of coming back as
    /// `"Mr. Casaubon"`. It keeps feeding a result back in from changing it.
    pub fn canonicalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        if let Some(canonical) = self.resolve(&raw.trim().to_lowercase()) {
            return canonical.to_string();
        }
        let cleaned = clean_name(raw);
        match self.resolve(&cleaned.to_lowercase()) {
            Some(canonical) => canonical.to_string(),
            None => cleaned,
        }
    }

    /// Number of alias keys in the index
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the index has no keys
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
