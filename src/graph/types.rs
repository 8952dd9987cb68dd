//! Graph output types
//!
//! Field names are the wire contract consumed by the visualization layer:
//! `nodes`, `links`, `id`, `source`, `target`, `weight`.

use serde::{Deserialize, Serialize};

/// A character node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphNode {
    /// Canonical character name
    pub id: String,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An undirected weighted link. `source` sorts lexically before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    /// Number of interactions between the two characters in the selection
    pub weight: u64,
}

impl GraphLink {
    /// Create a link, ordering the endpoints lexically
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: u64) -> Self {
        let (a, b) = (a.into(), b.into());
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether this link joins `a` and `b`, in either order
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Whether `name` is one of the endpoints
    pub fn touches(&self, name: &str) -> bool {
        self.source == name || self.target == name
    }
}

/// Character co-occurrence graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the link between two characters
    pub fn link(&self, a: &str, b: &str) -> Option<&GraphLink> {
        self.links.iter().find(|l| l.connects(a, b))
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

/// Parameters that produced a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMeta {
    /// Selected chapter keys, in ordinal order
    pub chapters: Vec<String>,
    /// Minimum link weight as requested (before clamping)
    #[serde(rename = "minConn")]
    pub min_conn: i64,
    /// Requested book, or `"all"`
    pub book: String,
}

/// A graph together with the selection that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphResponse {
    pub graph: Graph,
    pub meta: GraphMeta,
}
