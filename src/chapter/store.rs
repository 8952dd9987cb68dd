//! ChapterStore: interaction lists and character lists per chapter

use super::book::BookMapping;
use super::query::ChapterQuery;
use super::record::{ChapterRecord, InteractionRecord};
use crate::names::{clean_name, AliasIndex};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tracing::{info, warn};

/// Interaction lists and derived character lists for every chapter.
///
/// Chapter keys keep the order in which they were loaded.
#[derive(Debug, Clone, Default)]
pub struct ChapterStore {
    order: Vec<String>,
    records: HashMap<String, ChapterRecord>,
    characters: HashMap<String, Vec<String>>,
    books: BookMapping,
}

impl ChapterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from typed chapter records. A repeated key replaces the earlier record.
    pub fn from_records<I>(chapters: I, books: BookMapping) -> Self
    where
        I: IntoIterator<Item = (String, ChapterRecord)>,
    {
        let mut store = Self {
            books,
            ..Self::default()
        };
        for (key, record) in chapters {
            if store.records.insert(key.clone(), record).is_none() {
                store.order.push(key);
            }
        }
        store
    }

    /// Ingest the raw combined snapshot and chapter → book mapping.
    ///
    /// A chapter whose value is not a well-formed record is kept with no
    /// interactions. A non-object snapshot yields no chapters.
    pub fn load(combined: &Value, chapter_to_book: &Value) -> Self {
        let chapters: Vec<(String, ChapterRecord)> = match combined {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), parse_chapter(key, value)))
                .collect(),
            Value::Null => Vec::new(),
            _ => {
                warn!("combined chapter data is not an object; no chapters loaded");
                Vec::new()
            }
        };

        let books = match chapter_to_book {
            Value::Object(map) => BookMapping::from_raw(map),
            Value::Null => BookMapping::new(),
            _ => {
                warn!("chapter-to-book data is not an object; ignoring it");
                BookMapping::new()
            }
        };

        let store = Self::from_records(chapters, books);
        info!(chapters = store.len(), "loaded chapters");
        store
    }

    /// Recompute the character list of every chapter.
    ///
    /// A non-empty explicit `characters` list is used as-is. Otherwise the
    /// list is the sorted set of canonical names appearing in the chapter's
    /// interactions, with empty names dropped.
    pub fn rebuild_derived_characters(&mut self, aliases: &AliasIndex) {
        self.characters = self
            .records
            .iter()
            .map(|(key, record)| {
                let names = if record.characters.is_empty() {
                    derive_characters(&record.interactions, aliases)
                } else {
                    record.characters.clone()
                };
                (key.clone(), names)
            })
            .collect();
        info!(
            chapters = self.characters.len(),
            "rebuilt chapter character lists"
        );
    }

    /// Every known chapter key, in load order
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Select chapter keys by inclusive ordinal range and book
    pub fn select_chapter_keys(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        book: Option<&str>,
    ) -> Vec<String> {
        ChapterQuery {
            start,
            end,
            book: book.map(str::to_string),
        }
        .execute(self)
    }

    /// Interactions recorded for a chapter; empty for unknown keys
    pub fn interactions_for(&self, key: &str) -> &[InteractionRecord] {
        self.records
            .get(key)
            .map(|r| r.interactions.as_slice())
            .unwrap_or(&[])
    }

    /// Interactions for several chapters, keyed and ordered as requested
    pub fn interactions_for_keys<'a, S: AsRef<str>>(
        &'a self,
        keys: &'a [S],
    ) -> InteractionSelection<'a> {
        InteractionSelection {
            chapters: keys
                .iter()
                .map(|k| (k.as_ref(), self.interactions_for(k.as_ref())))
                .collect(),
        }
    }

    /// Character list of a chapter; empty until [`rebuild_derived_characters`] runs
    ///
    /// [`rebuild_derived_characters`]: ChapterStore::rebuild_derived_characters
    pub fn characters_for(&self, key: &str) -> &[String] {
        self.characters
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn books(&self) -> &BookMapping {
        &self.books
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Number of chapters
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn parse_chapter(key: &str, value: &Value) -> ChapterRecord {
    if !value.is_object() {
        return ChapterRecord::default();
    }
    match ChapterRecord::deserialize(value) {
        Ok(record) => record,
        Err(e) => {
            warn!(chapter = key, error = %e, "malformed chapter entry; treating as empty");
            ChapterRecord::default()
        }
    }
}

fn derive_characters(interactions: &[InteractionRecord], aliases: &AliasIndex) -> Vec<String> {
    interactions
        .iter()
        .flat_map(|it| [it.first(), it.second()])
        .map(|raw| clean_name(&aliases.canonicalize(raw)))
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Interaction lists for a selection of chapters.
///
/// Serializes as a JSON object keyed by chapter, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSelection<'a> {
    chapters: Vec<(&'a str, &'a [InteractionRecord])>,
}

impl<'a> InteractionSelection<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a [InteractionRecord])> + '_ {
        self.chapters.iter().copied()
    }

    pub fn get(&self, key: &str) -> Option<&'a [InteractionRecord]> {
        self.chapters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, records)| *records)
    }

    /// Total number of interactions across the selection
    pub fn interaction_count(&self) -> usize {
        self.chapters.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

impl Serialize for InteractionSelection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.chapters.len()))?;
        for (key, records) in &self.chapters {
            map.serialize_entry(key, records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::AliasEntry;
    use serde_json::json;

    fn aliases() -> AliasIndex {
        AliasIndex::from_entries(&[
            AliasEntry::new("Dorothea", ["Dodo", "Miss Brooke"]),
            AliasEntry::new("Casaubon", ["Mr. Casaubon"]),
        ])
    }

    #[test]
    fn load_preserves_key_order_and_interactions() {
        let combined = json!({
            "Chapter 2": {"interactions": [{"character_1": "Dorothea", "character_2": "Casaubon"}]},
            "Chapter 1": {"interactions": [{"character_1": "Dodo", "character_2": "Celia"}]},
        });
        let store = ChapterStore::load(&combined, &Value::Null);

        assert_eq!(store.keys(), ["Chapter 2", "Chapter 1"]);
        assert_eq!(store.interactions_for("Chapter 1").len(), 1);
        assert_eq!(store.interactions_for("Chapter 1")[0].first(), "Dodo");
    }

    #[test]
    fn malformed_chapters_load_empty() {
        let combined = json!({
            "Chapter 1": "not a chapter",
            "Chapter 2": {"interactions": "also wrong"},
            "Chapter 3": {"interactions": null},
        });
        let store = ChapterStore::load(&combined, &Value::Null);

        assert_eq!(store.len(), 3);
        for key in store.keys() {
            assert!(store.interactions_for(key).is_empty());
        }
    }

    #[test]
    fn bad_character_list_keeps_chapter_interactions() {
        let combined = json!({
            "Chapter 1": {
                "characters": ["Dorothea", null],
                "interactions": [{"character_1": "Dorothea", "character_2": "Celia"}],
            },
        });
        let mut store = ChapterStore::load(&combined, &Value::Null);
        store.rebuild_derived_characters(&aliases());

        assert_eq!(store.interactions_for("Chapter 1").len(), 1);
        assert_eq!(store.characters_for("Chapter 1"), ["Dorothea"]);
    }

    #[test]
    fn non_object_snapshot_has_no_chapters() {
        let store = ChapterStore::load(&json!(["Chapter 1"]), &json!("nope"));
        assert!(store.is_empty());
        assert!(store.books().is_empty());
    }

    #[test]
    fn unknown_chapter_has_no_interactions() {
        let store = ChapterStore::new();
        assert!(store.interactions_for("Chapter 99").is_empty());
        assert!(store.characters_for("Chapter 99").is_empty());
    }

    #[test]
    fn derived_characters_are_canonical_sorted_unique() {
        let combined = json!({
            "Chapter 1": {"interactions": [
                {"character_1": "Dodo", "character_2": "Mr. Casaubon"},
                {"character_1": "Miss Brooke", "character_2": "  Celia  "},
                {"character_1": "", "character_2": "Casaubon"},
            ]},
        });
        let mut store = ChapterStore::load(&combined, &Value::Null);
        store.rebuild_derived_characters(&aliases());

        assert_eq!(
            store.characters_for("Chapter 1"),
            ["Casaubon", "Celia", "Dorothea"]
        );
    }

    #[test]
    fn explicit_characters_preferred_when_present() {
        let combined = json!({
            "Chapter 1": {
                "characters": ["Dorothea", "Celia", "Mr. Brooke"],
                "interactions": [{"character_1": "Dodo", "character_2": "Mr. Casaubon"}],
            },
            "Chapter 2": {
                "characters": [],
                "interactions": [{"character_1": "Dodo", "character_2": "Mr. Casaubon"}],
            },
        });
        let mut store = ChapterStore::load(&combined, &Value::Null);
        store.rebuild_derived_characters(&aliases());

        assert_eq!(
            store.characters_for("Chapter 1"),
            ["Dorothea", "Celia", "Mr. Brooke"]
        );
        assert_eq!(store.characters_for("Chapter 2"), ["Casaubon", "Dorothea"]);
    }

    #[test]
    fn selection_serializes_in_requested_order() {
        let store = ChapterStore::from_records(
            [
                (
                    "Chapter 1".to_string(),
                    ChapterRecord::new(vec![InteractionRecord::new("Dodo", "Celia")]),
                ),
                ("Chapter 2".to_string(), ChapterRecord::default()),
            ],
            BookMapping::new(),
        );
        let keys = ["Chapter 2", "Chapter 1", "Chapter 7"];
        let selection = store.interactions_for_keys(&keys);

        assert_eq!(selection.len(), 3);
        assert_eq!(selection.interaction_count(), 1);
        assert_eq!(selection.get("Chapter 7"), Some(&[][..]));

        let text = serde_json::to_string(&selection).unwrap();
        assert_eq!(
            text,
            r#"{"Chapter 2":[],"Chapter 1":[{"character_1":"Dodo","character_2":"Celia"}],"Chapter 7":[]}"#
        );
    }

    #[test]
    fn repeated_keys_replace_earlier_records() {
        let store = ChapterStore::from_records(
            [
                ("Chapter 1".to_string(), ChapterRecord::default()),
                (
                    "Chapter 1".to_string(),
                    ChapterRecord::new(vec![InteractionRecord::new("Fred", "Mary")]),
                ),
            ],
            BookMapping::new(),
        );
        assert_eq!(store.keys(), ["Chapter 1"]);
        assert_eq!(store.interactions_for("Chapter 1").len(), 1);
    }
}
