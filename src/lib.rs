//! Castgraph: Character-Relationship Graph Engine
//!
//! Serves a novel's chapter-by-chapter character interaction records as
//! read-only views: canonical character identities, chapter selections and
//! weighted co-occurrence graphs.
//!
//! # Core Concepts
//!
//! - **Canonical names**: every spelling of a character resolves through a
//!   case-insensitive alias index to one identity
//! - **Chapters**: keyed by strings whose trailing digits give the ordinal
//!   used for range selection; each chapter also belongs to a book
//! - **Graphs**: nodes are canonical characters, links are undirected pairs
//!   weighted by how many interactions the selected chapters record
//!
//! # Example
//!
//! ```
//! use castgraph::{AliasEntry, CastEngine, DatasetSources};
//! use serde_json::json;
//!
//! let engine = CastEngine::from_sources(DatasetSources {
//!     aliases: vec![AliasEntry::new("Dorothea", ["Dodo"])],
//!     combined: json!({
//!         "Chapter 1": {"interactions": [{"character_1": "Dodo", "character_2": "Celia"}]}
//!     }),
//!     ..Default::default()
//! });
//!
//! let keys = engine.select_chapter_keys(Some(1), Some(1), None);
//! let graph = engine.build_graph(&keys, 1);
//! assert_eq!(graph.links[0].source, "Celia");
//! assert_eq!(graph.links[0].target, "Dorothea");
//! ```

mod de;

pub mod analysis;
pub mod chapter;
pub mod dataset;
pub mod graph;
pub mod names;

pub use analysis::{
    annotate_nodes, connected_components, degree_map, detect_communities, CharacterGroups,
    GraphStats, NodeSummary,
};
pub use chapter::{
    chapter_ordinal, BookLabel, BookMapping, ChapterQuery, ChapterRecord, ChapterStore,
    InteractionRecord, InteractionSelection,
};
pub use dataset::{CastEngine, CastError, CastResult, DataPaths, DatasetSources, DatasetSummary};
pub use graph::{Graph, GraphAggregator, GraphLink, GraphMeta, GraphNode, GraphResponse};
pub use names::{clean_name, AliasEntry, AliasIndex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
