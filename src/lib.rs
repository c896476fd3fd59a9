//! Maximum matching of researchers and bugs with augmenting paths.

pub mod batch;
pub mod bipartite_graph;
pub mod error;
pub mod matching;
pub mod pairing;
pub mod visits;

// Re-exports to flatten the crate.
pub use bipartite_graph::BipartiteGraph as BipartiteGraph;
pub use matching::{maximum_matching, Matcher};
pub use pairing::Pairing;
