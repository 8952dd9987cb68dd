//! Structural analysis of built graphs
//!
//! Everything here reads a finished [`Graph`](crate::graph::Graph) and works
//! over its emitted links only: a node kept alive by a pruned link shows up
//! with degree 0, as a singleton component and as its own community.

mod community;
mod groups;
mod stats;

pub use community::{detect_communities, MAX_SWEEPS};
pub use groups::{annotate_nodes, CharacterGroups, NodeSummary};
pub use stats::{connected_components, degree_map, GraphStats, TOP_CHARACTERS};
