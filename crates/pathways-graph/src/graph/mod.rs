//! Graph model plus the petgraph-backed working index used by pruning and traversal.

pub mod indexed;
pub mod lookup;
pub mod model;

pub use indexed::IndexedGraph;
pub use model::{ConnectionCounts, Edge, MechanismGraph, Node};
