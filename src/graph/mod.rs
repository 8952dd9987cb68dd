//! Character co-occurrence graph

mod aggregate;
mod types;


pub use aggregate::{min_weight, GraphAggregator, PairCounts};
pub use types::{Graph, GraphLink, GraphMeta, GraphNode, GraphResponse};
