//! Snapshot file locations and JSON loading
//!
//! A missing file is not an error: it is logged and contributes an empty
//! dataset, so the engine can start with whatever subset of files exists.

use super::engine::{CastError, CastResult};
use crate::de::null_as_default;
use crate::names::AliasEntry;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Conventional snapshot file names inside a data directory
pub const ALIASES_FILE: &str = "data.json";
pub const COMBINED_FILE: &str = "combined_chapters_all_books_1_86_merged_final.json";
pub const CHAPTER_TO_BOOK_FILE: &str = "chapter_to_book.json";
pub const GROUPED_FILE: &str = "middlemarch_characters_grouped.json";

/// Locations of the four snapshot files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub aliases: PathBuf,
    pub combined: PathBuf,
    pub chapter_to_book: PathBuf,
    pub grouped: PathBuf,
}

impl DataPaths {
    /// Conventional file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            aliases: dir.join(ALIASES_FILE),
            combined: dir.join(COMBINED_FILE),
            chapter_to_book: dir.join(CHAPTER_TO_BOOK_FILE),
            grouped: dir.join(GROUPED_FILE),
        }
    }

    pub fn with_aliases(mut self, path: impl Into<PathBuf>) -> Self {
        self.aliases = path.into();
        self
    }

    pub fn with_combined(mut self, path: impl Into<PathBuf>) -> Self {
        self.combined = path.into();
        self
    }

    pub fn with_chapter_to_book(mut self, path: impl Into<PathBuf>) -> Self {
        self.chapter_to_book = path.into();
        self
    }

    pub fn with_grouped(mut self, path: impl Into<PathBuf>) -> Self {
        self.grouped = path.into();
        self
    }
}

/// Alias snapshot file layout
#[derive(Debug, Default, Deserialize)]
struct AliasFile {
    #[serde(default, deserialize_with = "null_as_default")]
    aliases_full: Vec<AliasEntry>,
}

/// Parsed snapshot contents, before indexing
#[derive(Debug, Clone, Default)]
pub struct DatasetSources {
    pub aliases: Vec<AliasEntry>,
    /// Chapter key → `{characters?, interactions?}`; `Null` when absent
    pub combined: Value,
    /// Chapter number or key → book label; `Null` when absent
    pub chapter_to_book: Value,
    pub character_groups: Map<String, Value>,
}

impl DatasetSources {
    /// Read every snapshot file named by `paths`
    pub fn load(paths: &DataPaths) -> CastResult<Self> {
        let aliases = match read_json(&paths.aliases)? {
            Some(value) => {
                let file: AliasFile =
                    serde_json::from_value(value).map_err(|source| CastError::Json {
                        path: paths.aliases.clone(),
                        source,
                    })?;
                file.aliases_full
            }
            None => Vec::new(),
        };

        let combined = read_json(&paths.combined)?.unwrap_or(Value::Null);
        let chapter_to_book = read_json(&paths.chapter_to_book)?.unwrap_or(Value::Null);

        let character_groups = match read_json(&paths.grouped)? {
            Some(Value::Object(map)) => map,
            Some(_) => {
                warn!(path = %paths.grouped.display(), "character groups are not an object; ignoring them");
                Map::new()
            }
            None => Map::new(),
        };

        Ok(Self {
            aliases,
            combined,
            chapter_to_book,
            character_groups,
        })
    }
}

/// Parse a JSON file, or `None` if it does not exist
fn read_json(path: &Path) -> CastResult<Option<Value>> {
    if !path.exists() {
        warn!(path = %path.display(), "data file not found");
        return Ok(None);
    }
    let text = std::fs::read_to_string(path).map_err(|source| CastError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| CastError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}
