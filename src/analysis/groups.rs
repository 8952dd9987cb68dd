//! Character groups and per-node annotation

use super::community::detect_communities;
use super::stats::degree_map;
use crate::graph::Graph;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

/// Read-only view over the grouped-characters snapshot.
///
/// The snapshot is served verbatim; names are not canonicalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterGroups {
    raw: Map<String, Value>,
}

impl CharacterGroups {
    pub fn new(raw: Map<String, Value>) -> Self {
        info!(groups = raw.len(), "loaded character groups");
        Self { raw }
    }

    /// The snapshot exactly as loaded
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Group labels in file order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.raw.keys().map(String::as_str)
    }

    /// Members of a group; non-string entries are skipped
    pub fn members(&self, label: &str) -> Vec<&str> {
        self.raw
            .get(label)
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// First group (in file order) listing `name` exactly
    pub fn group_of(&self, name: &str) -> Option<&str> {
        self.raw.iter().find_map(|(label, members)| {
            members
                .as_array()
                .filter(|names| names.iter().any(|n| n.as_str() == Some(name)))
                .map(|_| label.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Display attributes of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub id: String,
    /// Number of emitted links touching the node
    pub connections: usize,
    pub group: Option<String>,
    pub community: usize,
}

/// Attach degree, group and community to every node, in node order
pub fn annotate_nodes(graph: &Graph, groups: &CharacterGroups) -> Vec<NodeSummary> {
    let degrees = degree_map(graph);
    let communities = detect_communities(graph);
    graph
        .node_ids()
        .map(|id| NodeSummary {
            id: id.to_string(),
            connections: degrees.get(id).copied().unwrap_or(0),
            group: groups.group_of(id).map(str::to_string),
            community: communities.get(id).copied().unwrap_or(0),
        })
        .collect()
}
