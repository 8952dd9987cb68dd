//! CastEngine: the immutable query context over a loaded dataset

use super::loader::{DataPaths, DatasetSources};
use crate::analysis::CharacterGroups;
use crate::chapter::{ChapterStore, InteractionRecord, InteractionSelection};
use crate::graph::{Graph, GraphAggregator, GraphMeta, GraphResponse};
use crate::names::{AliasEntry, AliasIndex};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum CastError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for dataset operations
pub type CastResult<T> = Result<T, CastError>;

/// Health summary of a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub status: &'static str,
    pub chapters_loaded: usize,
    pub aliases_loaded: usize,
    pub character_groups_loaded: usize,
}

/// The loaded dataset.
///
/// Built once, then only read: every query borrows it immutably, so one
/// engine can be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct CastEngine {
    alias_entries: Vec<AliasEntry>,
    aliases: AliasIndex,
    chapters: ChapterStore,
    groups: CharacterGroups,
}

impl CastEngine {
    /// Create an engine with no data
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the engine from already-parsed sources
    pub fn from_sources(sources: DatasetSources) -> Self {
        let aliases = AliasIndex::from_entries(&sources.aliases);
        let mut chapters = ChapterStore::load(&sources.combined, &sources.chapter_to_book);
        chapters.rebuild_derived_characters(&aliases);
        Self {
            alias_entries: sources.aliases,
            aliases,
            chapters,
            groups: CharacterGroups::new(sources.character_groups),
        }
    }

    /// Read the snapshot files and build the engine
    pub fn load(paths: &DataPaths) -> CastResult<Self> {
        Ok(Self::from_sources(DatasetSources::load(paths)?))
    }

    /// Chapter keys in an inclusive ordinal range and/or book, in ordinal order
    pub fn select_chapter_keys(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        book: Option<&str>,
    ) -> Vec<String> {
        self.chapters.select_chapter_keys(start, end, book)
    }

    /// Interactions of one chapter; empty for unknown chapters
    pub fn interactions_for(&self, chapter_key: &str) -> &[InteractionRecord] {
        self.chapters.interactions_for(chapter_key)
    }

    /// Interactions of several chapters, in the order given
    pub fn interactions_for_keys<'a, S: AsRef<str>>(
        &'a self,
        chapter_keys: &'a [S],
    ) -> InteractionSelection<'a> {
        self.chapters.interactions_for_keys(chapter_keys)
    }

    /// Canonical characters of one chapter
    pub fn chapter_characters(&self, chapter_key: &str) -> &[String] {
        self.chapters.characters_for(chapter_key)
    }

    /// Aggregate the given chapters into a graph
    pub fn build_graph<S: AsRef<str>>(&self, chapter_keys: &[S], min_conn: i64) -> Graph {
        GraphAggregator::new(&self.aliases, &self.chapters).build(chapter_keys, min_conn)
    }

    /// Select chapters and build their graph in one step
    pub fn graph_query(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        book: Option<&str>,
        min_conn: i64,
    ) -> GraphResponse {
        let chapters = self.select_chapter_keys(start, end, book);
        debug!(
            ?start,
            ?end,
            ?book,
            min_conn,
            selected = chapters.len(),
            "graph query"
        );
        let graph = self.build_graph(&chapters, min_conn);
        let book = match book {
            Some(b) if !b.is_empty() => b.to_string(),
            _ => "all".to_string(),
        };
        GraphResponse {
            graph,
            meta: GraphMeta {
                chapters,
                min_conn,
                book,
            },
        }
    }

    /// Resolve a raw name to its canonical form
    pub fn canonicalize(&self, raw: &str) -> String {
        self.aliases.canonicalize(raw)
    }

    /// Alias entries exactly as loaded
    pub fn alias_entries(&self) -> &[AliasEntry] {
        &self.alias_entries
    }

    pub fn alias_index(&self) -> &AliasIndex {
        &self.aliases
    }

    pub fn chapters(&self) -> &ChapterStore {
        &self.chapters
    }

    /// Grouped-characters snapshot exactly as loaded
    pub fn character_groups(&self) -> &CharacterGroups {
        &self.groups
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            status: "running",
            chapters_loaded: self.chapters.len(),
            aliases_loaded: self.alias_entries.len(),
            character_groups_loaded: self.groups.len(),
        }
    }
}
