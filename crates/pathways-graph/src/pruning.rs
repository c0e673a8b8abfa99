//! Cascading connectivity pruning.
//!
//! Each pass re-derives degrees from the surviving edges and removes every
//! node below the threshold together with its edges. Passes repeat until one
//! removes nothing, so a hub whose only neighbours were pruned goes too.

use tracing::debug;

use crate::graph::{IndexedGraph, MechanismGraph};

/// Outcome of a pruning run.
#[derive(Debug, Clone)]
pub struct PruneReport {
    /// The reduced graph.
    pub graph: MechanismGraph,
    /// Passes that removed at least one node.
    pub passes: usize,
    /// Number of nodes removed.
    pub nodes_removed: usize,
    /// Number of edges removed.
    pub edges_removed: usize,
}

/// Remove every node with fewer than `min_connections` edges, to a fixed point.
/// Thresholds of 0 and 1 return the input unchanged.
pub fn filter_by_min_connections(
    graph: &MechanismGraph,
    min_connections: usize,
) -> MechanismGraph {
    prune_with_report(graph, min_connections).graph
}

/// Same as [`filter_by_min_connections`], with removal counts.
pub fn prune_with_report(graph: &MechanismGraph, min_connections: usize) -> PruneReport {
    if min_connections <= 1 {
        return PruneReport {
            graph: graph.clone(),
            passes: 0,
            nodes_removed: 0,
            edges_removed: 0,
        };
    }

    let mut working = IndexedGraph::from_graph(graph);
    let mut passes = 0;

    loop {
        let below: Vec<String> = working
            .graph
            .node_indices()
            .filter(|&idx| working.degree(idx) < min_connections)
            .filter_map(|idx| working.graph.node_weight(idx).cloned())
            .collect();

        if below.is_empty() {
            break;
        }

        passes += 1;
        for id in &below {
            working.remove_node(id);
        }
        debug!(
            pass = passes,
            removed = below.len(),
            remaining = working.node_count(),
            "connectivity pruning pass"
        );

        if working.node_count() == 0 {
            break;
        }
    }

    // Node removal takes its edges with it, so the surviving edges are exactly
    // those with both endpoints left.
    let surviving = working.node_ids();
    let reduced = graph.restrict_to_nodes(|n| surviving.contains(n.id.as_str()));
    debug_assert_eq!(reduced.edge_count(), working.edge_count());

    PruneReport {
        nodes_removed: graph.node_count() - reduced.node_count(),
        edges_removed: graph.edge_count() - reduced.edge_count(),
        graph: reduced,
        passes,
    }
}
