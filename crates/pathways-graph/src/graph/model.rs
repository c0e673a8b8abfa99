//! Node and edge value objects plus the `MechanismGraph` container.
//!
//! A graph is never mutated after construction. Reductions produce a new graph
//! through `restrict_to_edges` / `restrict_to_nodes`, both of which re-derive
//! connection counts from the surviving edge set.

use std::collections::{HashMap, HashSet};

use pathways_core::{Category, Direction, EvidenceQuality, Scale};
use serde::{Deserialize, Serialize};

/// Incoming / outgoing edge counts of a node within one graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionCounts {
    pub incoming: usize,
    pub outgoing: usize,
}

impl ConnectionCounts {
    pub fn total(&self) -> usize {
        self.incoming + self.outgoing
    }
}

/// A health or structural-determinant concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub category: Category,
    pub scale: Option<Scale>,
    pub connections: ConnectionCounts,
}

impl Node {
    /// Derived weight: incoming + outgoing.
    pub fn weight(&self) -> usize {
        self.connections.total()
    }

    /// A node with no edges in its graph.
    pub fn is_isolated(&self) -> bool {
        self.connections.total() == 0
    }
}

/// One causal mechanism between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The source mechanism's id.
    pub id: String,
    /// The source mechanism's display name.
    pub label: String,
    pub source: String,
    pub target: String,
    pub direction: Direction,
    pub category: Category,
    pub evidence: EvidenceQuality,
    /// Numeric encoding of `evidence`: A=3, B=2, C=1.
    pub strength: u32,
    pub study_count: u32,
}

/// Nodes and edges of one (possibly reduced) mechanism network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MechanismGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl MechanismGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph, recomputing every node's connection counts from `edges`.
    ///
    /// Edges whose endpoints are not in `nodes` are dropped so the result never
    /// holds dangling references.
    pub(crate) fn from_parts(mut nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut position: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            position.insert(node.id.as_str(), i);
        }

        let mut counts = vec![ConnectionCounts::default(); nodes.len()];
        let mut kept = Vec::with_capacity(edges.len());
        for edge in edges {
            let (Some(&s), Some(&t)) = (
                position.get(edge.source.as_str()),
                position.get(edge.target.as_str()),
            ) else {
                continue;
            };
            counts[s].outgoing += 1;
            counts[t].incoming += 1;
            kept.push(edge);
        }

        for (node, count) in nodes.iter_mut().zip(counts) {
            node.connections = count;
        }

        Self { nodes, edges: kept }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Look up an edge by mechanism id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Keep edges matching `keep`, then only the nodes a surviving edge references.
    pub fn restrict_to_edges(&self, keep: impl Fn(&Edge) -> bool) -> MechanismGraph {
        let edges: Vec<Edge> = self.edges.iter().filter(|&e| keep(e)).cloned().collect();
        let referenced: HashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let nodes = self
            .nodes
            .iter()
            .filter(|n| referenced.contains(n.id.as_str()))
            .cloned()
            .collect();
        MechanismGraph::from_parts(nodes, edges)
    }

    /// Keep nodes matching `keep`, then only the edges whose endpoints both survived.
    pub fn restrict_to_nodes(&self, keep: impl Fn(&Node) -> bool) -> MechanismGraph {
        let nodes: Vec<Node> = self.nodes.iter().filter(|&n| keep(n)).cloned().collect();
        let surviving: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| {
                surviving.contains(e.source.as_str()) && surviving.contains(e.target.as_str())
            })
            .cloned()
            .collect();
        MechanismGraph::from_parts(nodes, edges)
    }
}
