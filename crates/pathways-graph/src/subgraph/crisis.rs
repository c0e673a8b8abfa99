//! Crisis upstream subgraph: "what feeds into this outcome?"
//!
//! Breadth-first traversal against edge direction, starting from every crisis
//! endpoint at once. Each node is expanded at most once, at its shortest
//! distance from any endpoint. An edge is kept when its target is expanded
//! (depth < max) and its evidence meets the threshold.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use pathways_core::config::CrisisConfig;
use pathways_core::constants::{MAX_CRISIS_DEPTH, MIN_CRISIS_DEPTH};
use pathways_core::{Category, EvidenceQuality, QueryError};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use tracing::debug;

use crate::graph::{IndexedGraph, MechanismGraph, Node};

/// Traversal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisOptions {
    /// Upstream hops from each endpoint, 1-8.
    pub max_depth: usize,
    /// Edges weaker than this grade are not followed.
    pub min_evidence: EvidenceQuality,
}

impl Default for CrisisOptions {
    fn default() -> Self {
        (&CrisisConfig::default()).into()
    }
}

impl From<&CrisisConfig> for CrisisOptions {
    fn from(config: &CrisisConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            min_evidence: config.min_evidence,
        }
    }
}

/// A node of the extracted chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrisisNode {
    pub node: Node,
    /// Hops from the nearest crisis endpoint (0 for endpoints).
    pub depth: usize,
    /// No incoming edge inside the subgraph: an upstream root.
    pub policy_lever: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrisisStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_category: BTreeMap<Category, usize>,
    pub edges_by_category: BTreeMap<Category, usize>,
    pub policy_lever_count: usize,
}

/// Result of an upstream extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrisisSubgraph {
    pub endpoints: Vec<String>,
    pub graph: MechanismGraph,
    /// Annotated nodes, in graph order.
    pub nodes: Vec<CrisisNode>,
    pub stats: CrisisStats,
}

impl CrisisSubgraph {
    pub fn policy_levers(&self) -> impl Iterator<Item = &CrisisNode> {
        self.nodes.iter().filter(|n| n.policy_lever)
    }

    pub fn is_policy_lever(&self, node_id: &str) -> bool {
        self.nodes
            .iter()
            .any(|n| n.policy_lever && n.node.id == node_id)
    }

    pub fn depth_of(&self, node_id: &str) -> Option<usize> {
        self.nodes
            .iter()
            .find(|n| n.node.id == node_id)
            .map(|n| n.depth)
    }
}

/// Nodes at the top of the scale hierarchy, the natural crisis endpoints.
pub fn crisis_endpoints(graph: &MechanismGraph) -> Vec<&str> {
    graph
        .nodes()
        .iter()
        .filter(|n| n.scale.is_some_and(|s| s.is_crisis()))
        .map(|n| n.id.as_str())
        .collect()
}

/// Trace upstream from `endpoints` and return the chain with policy-lever flags.
pub fn extract_crisis_subgraph<S: AsRef<str>>(
    graph: &MechanismGraph,
    endpoints: &[S],
    options: &CrisisOptions,
) -> Result<CrisisSubgraph, QueryError> {
    if endpoints.is_empty() {
        return Err(QueryError::NoEndpoints);
    }
    if !(MIN_CRISIS_DEPTH..=MAX_CRISIS_DEPTH).contains(&options.max_depth) {
        return Err(QueryError::InvalidBound {
            name: "max_depth",
            value: options.max_depth,
            reason: format!("must be within {MIN_CRISIS_DEPTH}..={MAX_CRISIS_DEPTH}"),
        });
    }

    let indexed = IndexedGraph::from_graph(graph);
    let mut depth = HashMap::new();
    let mut queue = VecDeque::new();
    let mut endpoint_ids = Vec::with_capacity(endpoints.len());

    for endpoint in endpoints {
        let id = endpoint.as_ref();
        let idx = indexed.get_node(id).ok_or_else(|| QueryError::UnknownNode {
            node_id: id.to_string(),
        })?;
        if depth.insert(idx, 0).is_none() {
            endpoint_ids.push(id.to_string());
            queue.push_back((idx, 0));
        }
    }

    let mut kept_edges: HashSet<usize> = HashSet::new();
    while let Some((current, d)) = queue.pop_front() {
        if d >= options.max_depth {
            continue;
        }
        for edge in indexed.graph.edges_directed(current, Direction::Incoming) {
            let position = *edge.weight();
            if !graph.edges()[position].evidence.meets(options.min_evidence) {
                continue;
            }
            kept_edges.insert(position);

            let upstream = edge.source();
            if !depth.contains_key(&upstream) {
                depth.insert(upstream, d + 1);
                queue.push_back((upstream, d + 1));
            }
        }
    }

    let depth_by_id: HashMap<&str, usize> = depth
        .iter()
        .filter_map(|(&idx, &d)| indexed.graph.node_weight(idx).map(|id| (id.as_str(), d)))
        .collect();

    let nodes = graph
        .nodes()
        .iter()
        .filter(|n| depth_by_id.contains_key(n.id.as_str()))
        .cloned()
        .collect();
    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .filter(|(position, _)| kept_edges.contains(position))
        .map(|(_, edge)| edge.clone())
        .collect();
    let sub = MechanismGraph::from_parts(nodes, edges);

    let annotated: Vec<CrisisNode> = sub
        .nodes()
        .iter()
        .map(|node| CrisisNode {
            depth: depth_by_id.get(node.id.as_str()).copied().unwrap_or(0),
            policy_lever: node.connections.incoming == 0,
            node: node.clone(),
        })
        .collect();

    let mut stats = CrisisStats {
        node_count: sub.node_count(),
        edge_count: sub.edge_count(),
        policy_lever_count: annotated.iter().filter(|n| n.policy_lever).count(),
        ..Default::default()
    };
    for node in sub.nodes() {
        *stats.nodes_by_category.entry(node.category).or_default() += 1;
    }
    for edge in sub.edges() {
        *stats.edges_by_category.entry(edge.category).or_default() += 1;
    }

    debug!(
        endpoints = endpoint_ids.len(),
        nodes = stats.node_count,
        edges = stats.edge_count,
        levers = stats.policy_lever_count,
        "extracted crisis subgraph"
    );

    Ok(CrisisSubgraph {
        endpoints: endpoint_ids,
        graph: sub,
        nodes: annotated,
        stats,
    })
}
