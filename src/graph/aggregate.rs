//! GraphAggregator: pairwise interaction counts → weighted undirected graph

use super::types::{Graph, GraphLink, GraphNode};
use crate::chapter::ChapterStore;
use crate::names::AliasIndex;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Effective minimum link weight for a requested `min_conn` (never below 1)
pub fn min_weight(min_conn: i64) -> u64 {
    u64::try_from(min_conn.max(1)).unwrap_or(1)
}

/// Interaction counts per unordered character pair, plus every endpoint seen
#[derive(Debug, Clone, Default)]
pub struct PairCounts {
    pairs: BTreeMap<(String, String), u64>,
    names: BTreeSet<String>,
}

impl PairCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one interaction between two canonical names.
    ///
    /// Empty names and self-interactions are ignored. Returns whether the
    /// interaction was counted.
    pub fn record(&mut self, a: String, b: String) -> bool {
        if a.is_empty() || b.is_empty() || a == b {
            return false;
        }
        let (u, v) = if a < b { (a, b) } else { (b, a) };
        self.names.insert(u.clone());
        self.names.insert(v.clone());
        *self.pairs.entry((u, v)).or_insert(0) += 1;
        true
    }

    /// Count recorded for a pair, in either order
    pub fn count(&self, a: &str, b: &str) -> u64 {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs
            .get(&(key.0.to_string(), key.1.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Emit the graph, keeping links with `count >= max(1, min_conn)`.
    ///
    /// Nodes are every endpoint that was counted, including endpoints whose
    /// only links fall below the threshold. Consumers render those as
    /// isolated characters, so the node set is intentionally not pruned.
    pub fn into_graph(self, min_conn: i64) -> Graph {
        let threshold = min_weight(min_conn);
        let links = self
            .pairs
            .into_iter()
            .filter(|(_, weight)| *weight >= threshold)
            .map(|((source, target), weight)| GraphLink {
                source,
                target,
                weight,
            })
            .collect();
        let nodes = self.names.into_iter().map(GraphNode::new).collect();
        Graph { nodes, links }
    }
}

/// Aggregates interactions of selected chapters into a [`Graph`]
#[derive(Debug, Clone, Copy)]
pub struct GraphAggregator<'a> {
    aliases: &'a AliasIndex,
    chapters: &'a ChapterStore,
}

impl<'a> GraphAggregator<'a> {
    pub fn new(aliases: &'a AliasIndex, chapters: &'a ChapterStore) -> Self {
        Self { aliases, chapters }
    }

    /// Count canonical pairs over the given chapters without pruning
    pub fn count_pairs<S: AsRef<str>>(&self, chapter_keys: &[S]) -> PairCounts {
        let mut counts = PairCounts::new();
        for key in chapter_keys {
            for interaction in self.chapters.interactions_for(key.as_ref()) {
                counts.record(
                    self.aliases.canonicalize(interaction.first()),
                    self.aliases.canonicalize(interaction.second()),
                );
            }
        }
        counts
    }

    /// Build the graph for the given chapters.
    ///
    /// Links are ordered by `(source, target)` and nodes by name. Unknown
    /// chapter keys contribute nothing.
    pub fn build<S: AsRef<str>>(&self, chapter_keys: &[S], min_conn: i64) -> Graph {
        let graph = self.count_pairs(chapter_keys).into_graph(min_conn);
        debug!(
            chapters = chapter_keys.len(),
            min_conn,
            nodes = graph.node_count(),
            links = graph.link_count(),
            "built graph"
        );
        graph
    }
}
