//! Single-pass category and scale reductions.
//!
//! Neither filter cascades: dropping an edge never makes a kept node
//! ineligible. An empty selection returns the input unchanged.

use pathways_core::{Category, Scale};

use crate::graph::MechanismGraph;

/// Keep edges whose category is in `categories`, then the nodes they reference.
pub fn filter_by_category(graph: &MechanismGraph, categories: &[Category]) -> MechanismGraph {
    if categories.is_empty() {
        return graph.clone();
    }
    graph.restrict_to_edges(|e| categories.contains(&e.category))
}

/// Keep nodes whose scale is in `scales`, then the edges between them.
/// Nodes without a scale never match a non-empty selection.
pub fn filter_by_scale(graph: &MechanismGraph, scales: &[Scale]) -> MechanismGraph {
    if scales.is_empty() {
        return graph.clone();
    }
    graph.restrict_to_nodes(|n| n.scale.is_some_and(|s| scales.contains(&s)))
}
