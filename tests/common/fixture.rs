//! Snapshot fixtures written to a temporary data directory

use castgraph::{CastEngine, DataPaths};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

/// A data directory populated with snapshot files
pub struct TestDataset {
    dir: TempDir,
    pub paths: DataPaths,
}

impl TestDataset {
    /// Create an empty data directory (no snapshot files yet)
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("create temp data dir");
        let paths = DataPaths::in_dir(dir.path());
        Self { dir, paths }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_aliases(self, aliases: Value) -> Self {
        write(&self.paths.aliases, &json!({ "aliases_full": aliases }));
        self
    }

    pub fn with_combined(self, combined: Value) -> Self {
        write(&self.paths.combined, &combined);
        self
    }

    pub fn with_chapter_to_book(self, mapping: Value) -> Self {
        write(&self.paths.chapter_to_book, &mapping);
        self
    }

    pub fn with_groups(self, groups: Value) -> Self {
        write(&self.paths.grouped, &groups);
        self
    }

    /// Write raw text to one of the snapshot files
    pub fn with_raw(self, path: &Path, text: &str) -> Self {
        std::fs::write(path, text).expect("write raw fixture");
        self
    }

    pub fn engine(&self) -> CastEngine {
        CastEngine::load(&self.paths).expect("load fixture dataset")
    }
}

fn write(path: &Path, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("serialize fixture");
    std::fs::write(path, text).expect("write fixture");
}

/// A small slice of Middlemarch across two books
pub fn middlemarch() -> TestDataset {
    TestDataset::empty()
        .with_aliases(json!([
            {"canonical_name": "Dorothea", "aliases": ["Dodo", "Miss Brooke", "Mrs. Casaubon"]},
            {"canonical_name": "Casaubon", "aliases": ["Mr. Casaubon", "Edward Casaubon"]},
            {"canonical_name": "Celia", "aliases": ["Kitty"]},
            {"canonical_name": "Will Ladislaw", "aliases": ["Will", "Ladislaw"]},
            {"canonical_name": "Arthur Brooke", "aliases": ["Mr. Brooke", "Uncle"]},
            {"canonical_name": "Lydgate", "aliases": ["Tertius Lydgate", "Mr. Lydgate"]},
            {"canonical_name": "Rosamond", "aliases": ["Rosy", "Miss Vincy"]}
        ]))
        .with_combined(json!({
            "Chapter 1": {
                "characters": [],
                "interactions": [
                    {"character_1": "Dodo", "character_2": "Kitty", "type": "conversation"},
                    {"character_1": "Celia", "character_2": "Miss Brooke", "type": "conversation"},
                    {"character_1": "Dorothea", "character_2": "Mr. Brooke", "type": "mention"}
                ]
            },
            "Chapter 2": {
                "interactions": [
                    {"character_1": "Dodo", "character_2": "Mr. Casaubon", "type": "conversation"},
                    {"character_1": "Mr. Brooke", "character_2": "Casaubon", "type": "conversation"},
                    {"character_1": "Sir James", "character_2": "Dorothea", "type": "conversation"}
                ]
            },
            "Chapter 10": {
                "interactions": [
                    {"character_1": "Dorothea", "character_2": "Casaubon", "type": "conversation"},
                    {"character_1": "Will", "character_2": "Dorothea", "type": "conversation"},
                    {"character_1": "Casaubon", "character_2": "Casaubon", "type": "reflection"}
                ]
            },
            "Chapter 11": {
                "characters": ["Lydgate", "Rosamond", "Fred Vincy"],
                "interactions": [
                    {"character_1": "Mr. Lydgate", "character_2": "Rosy", "type": "conversation"},
                    {"character_1": "Rosamond", "character_2": "Lydgate", "type": "conversation"}
                ]
            },
            "Finale": {
                "interactions": [
                    {"character_1": "Dorothea", "character_2": "Will Ladislaw", "type": "marriage"}
                ]
            }
        }))
        .with_chapter_to_book(json!({
            "1": 1,
            "2": 1,
            "10": "1",
            "11": 2,
            "Finale": "Finale"
        }))
        .with_groups(json!({
            "The Brookes": ["Dorothea", "Celia", "Arthur Brooke"],
            "Lowick": ["Casaubon", "Will Ladislaw"],
            "Middlemarch Townspeople & Officials": ["Lydgate", "Rosamond"]
        }))
}
