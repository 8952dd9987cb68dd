//! Degree statistics and connected components

use crate::graph::Graph;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Number of highest-degree characters reported by [`GraphStats`]
pub const TOP_CHARACTERS: usize = 5;

/// Links touching each node. Nodes without surviving links have degree 0.
pub fn degree_map(graph: &Graph) -> BTreeMap<String, usize> {
    let mut degrees: BTreeMap<String, usize> =
        graph.node_ids().map(|id| (id.to_string(), 0)).collect();
    for link in &graph.links {
        *degrees.entry(link.source.clone()).or_insert(0) += 1;
        *degrees.entry(link.target.clone()).or_insert(0) += 1;
    }
    degrees
}

/// Summary numbers for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub links: usize,
    /// `2 * links / nodes`
    pub avg_degree: f64,
    pub max_degree: usize,
    /// Share of possible undirected links present
    pub density: f64,
    /// Highest-degree characters, ties broken by name
    pub top_characters: Vec<(String, usize)>,
}

impl GraphStats {
    pub fn compute(graph: &Graph) -> Self {
        let nodes = graph.node_count();
        let links = graph.link_count();
        let degrees = degree_map(graph);

        let avg_degree = if nodes == 0 {
            0.0
        } else {
            (2 * links) as f64 / nodes as f64
        };
        let possible = nodes.saturating_sub(1) * nodes / 2;
        let density = if possible == 0 {
            0.0
        } else {
            links as f64 / possible as f64
        };

        let mut ranked: Vec<(String, usize)> = degrees.into_iter().collect();
        // BTreeMap iteration is name-ordered, so a stable sort keeps ties by name
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let max_degree = ranked.first().map(|(_, d)| *d).unwrap_or(0);
        ranked.truncate(TOP_CHARACTERS);

        Self {
            nodes,
            links,
            avg_degree,
            max_degree,
            density,
            top_characters: ranked,
        }
    }
}

/// Partition nodes by connectivity over emitted links.
///
/// Members are sorted by name; components are ordered largest first, then
/// by first member.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let mut adjacency: HashMap<&str, Vec<&str>> =
        graph.node_ids().map(|id| (id, Vec::new())).collect();
    for link in &graph.links {
        adjacency
            .entry(link.source.as_str())
            .or_default()
            .push(link.target.as_str());
        adjacency
            .entry(link.target.as_str())
            .or_default()
            .push(link.source.as_str());
    }

    let mut starts: Vec<&str> = adjacency.keys().copied().collect();
    starts.sort_unstable();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();
    for start in starts {
        if seen.contains(start) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(current) = queue.pop_front() {
            component.push(current.to_string());
            for &next in adjacency.get(current).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        component.sort();
        components.push(component);
    }

    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
    components
}
