//! petgraph::StableGraph working copy of a `MechanismGraph`.
//!
//! Node weights are node ids, edge weights are positions into the source
//! graph's edge list. Indices stay valid across removals, which lets pruning
//! delete nodes pass after pass without rebuilding.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use super::model::MechanismGraph;

/// The underlying directed graph type.
pub type MechanismStableGraph = StableGraph<String, usize, Directed>;

/// Wrapper providing id-indexed access to the working graph.
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: MechanismStableGraph,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Index every node and edge of `source`.
    pub fn from_graph(source: &MechanismGraph) -> Self {
        let mut indexed = Self {
            graph: StableGraph::with_capacity(source.node_count(), source.edge_count()),
            node_index: HashMap::with_capacity(source.node_count()),
        };
        for node in source.nodes() {
            indexed.ensure_node(&node.id);
        }
        for (position, edge) in source.edges().iter().enumerate() {
            let s = indexed.ensure_node(&edge.source);
            let t = indexed.ensure_node(&edge.target);
            indexed.graph.add_edge(s, t, position);
        }
        indexed
    }

    /// Get or create a node for the given id.
    pub fn ensure_node(&mut self, node_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(node_id) {
            return idx;
        }
        let idx = self.graph.add_node(node_id.to_string());
        self.node_index.insert(node_id.to_string(), idx);
        idx
    }

    /// Look up a node index by id.
    pub fn get_node(&self, node_id: &str) -> Option<NodeIndex> {
        self.node_index.get(node_id).copied()
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        if let Some(idx) = self.node_index.remove(node_id) {
            self.graph.remove_node(idx);
            true
        } else {
            false
        }
    }

    /// Incoming + outgoing edges of `idx` in the current working graph.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
            + self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// Ids of the nodes still present.
    pub fn node_ids(&self) -> HashSet<&str> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).map(String::as_str))
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
