//! Label-propagation community detection
//!
//! A greedy simplification of Louvain modularity optimization that groups
//! characters by connection strength. Good enough for colouring a network
//! view; it makes no modularity guarantees.

use crate::graph::Graph;
use std::collections::{BTreeMap, HashMap};

/// Upper bound on full sweeps over the node list
pub const MAX_SWEEPS: usize = 10;

/// Assign every node a community index.
///
/// Each node starts alone (community = its position in `graph.nodes`). A
/// sweep visits nodes in order and moves a node to the neighbouring
/// community it is most strongly linked to, provided that link weight
/// strictly exceeds its weight to its current community. Ties go to the
/// lower community index. Sweeps stop after [`MAX_SWEEPS`] or once nothing
/// moves. Indices are renumbered from 0 in order of first appearance.
pub fn detect_communities(graph: &Graph) -> BTreeMap<String, usize> {
    let ids: Vec<&str> = graph.node_ids().collect();
    let position: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    // Symmetric weighted adjacency by node position
    let mut adjacency: Vec<BTreeMap<usize, u64>> = vec![BTreeMap::new(); ids.len()];
    for link in &graph.links {
        let (Some(&s), Some(&t)) = (
            position.get(link.source.as_str()),
            position.get(link.target.as_str()),
        ) else {
            continue;
        };
        *adjacency[s].entry(t).or_insert(0) += link.weight;
        *adjacency[t].entry(s).or_insert(0) += link.weight;
    }

    let mut community: Vec<usize> = (0..ids.len()).collect();
    for _ in 0..MAX_SWEEPS {
        let mut moved = false;
        for node in 0..ids.len() {
            let mut to_community: BTreeMap<usize, u64> = BTreeMap::new();
            for (&neighbour, &weight) in &adjacency[node] {
                *to_community.entry(community[neighbour]).or_insert(0) += weight;
            }

            let mut best: Option<(usize, u64)> = None;
            for (&c, &weight) in &to_community {
                if best.map_or(true, |(_, w)| weight > w) {
                    best = Some((c, weight));
                }
            }

            if let Some((c, weight)) = best {
                let current = community[node];
                let current_weight = to_community.get(&current).copied().unwrap_or(0);
                if c != current && weight > current_weight {
                    community[node] = c;
                    moved = true;
                }
            }
        }
        if !moved {
            break;
        }
    }

    let mut renumbered: HashMap<usize, usize> = HashMap::new();
    ids.iter()
        .zip(community)
        .map(|(id, c)| {
            let next = renumbered.len();
            let index = *renumbered.entry(c).or_insert(next);
            (id.to_string(), index)
        })
        .collect()
}
