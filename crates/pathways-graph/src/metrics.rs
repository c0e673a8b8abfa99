//! Node importance (degree, centrality) and graph-level summaries.
//!
//! Metrics are always computed against the graph passed in; centrality is
//! relative to that graph's node count, never to the unfiltered network.

use std::collections::{BTreeMap, HashMap};

use pathways_core::{Category, EvidenceQuality};
use serde::Serialize;

use crate::graph::{MechanismGraph, Node};

/// A node annotated with its importance metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub node: Node,
    /// Incoming + outgoing edges in the graph the metrics were computed on.
    pub degree: usize,
    /// `degree / node_count` of that graph.
    pub centrality: f64,
}

/// Annotate every node, in graph order.
pub fn compute_metrics(graph: &MechanismGraph) -> Vec<RankedNode> {
    let mut degree: HashMap<&str, usize> = HashMap::with_capacity(graph.node_count());
    for edge in graph.edges() {
        *degree.entry(edge.source.as_str()).or_default() += 1;
        *degree.entry(edge.target.as_str()).or_default() += 1;
    }

    let total = graph.node_count();
    graph
        .nodes()
        .iter()
        .map(|node| {
            let d = degree.get(node.id.as_str()).copied().unwrap_or(0);
            RankedNode {
                node: node.clone(),
                degree: d,
                centrality: if total == 0 {
                    0.0
                } else {
                    d as f64 / total as f64
                },
            }
        })
        .collect()
}

/// Nodes by importance: degree descending, then id ascending.
/// `limit` keeps only the top entries.
pub fn rank_nodes(graph: &MechanismGraph, limit: Option<usize>) -> Vec<RankedNode> {
    let mut ranked = compute_metrics(graph);
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.node.id.cmp(&b.node.id)));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Summary counts for tables and legends.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub edges_by_category: BTreeMap<Category, usize>,
    pub nodes_by_category: BTreeMap<Category, usize>,
    pub edges_by_evidence: BTreeMap<EvidenceQuality, usize>,
    pub total_studies: u64,
}

impl GraphStats {
    pub fn compute(graph: &MechanismGraph) -> Self {
        let mut stats = GraphStats {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            ..Default::default()
        };
        for node in graph.nodes() {
            *stats.nodes_by_category.entry(node.category).or_default() += 1;
        }
        for edge in graph.edges() {
            *stats.edges_by_category.entry(edge.category).or_default() += 1;
            *stats.edges_by_evidence.entry(edge.evidence).or_default() += 1;
            stats.total_studies += u64::from(edge.study_count);
        }
        stats
    }
}
