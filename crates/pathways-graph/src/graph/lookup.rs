//! Browse helpers: node search and direct causes / effects of a node.

use pathways_core::QueryError;

use super::model::{Edge, MechanismGraph, Node};

/// Nodes whose id or label contains `query` (case-insensitive).
/// A blank query matches nothing.
pub fn search_nodes<'g>(graph: &'g MechanismGraph, query: &str) -> Vec<&'g Node> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    graph
        .nodes()
        .iter()
        .filter(|n| {
            n.id.to_lowercase().contains(&needle) || n.label.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Edges ending at `node_id`: its direct causes.
pub fn upstream<'g>(
    graph: &'g MechanismGraph,
    node_id: &str,
) -> Result<Vec<&'g Edge>, QueryError> {
    require_node(graph, node_id)?;
    Ok(graph.edges().iter().filter(|e| e.target == node_id).collect())
}

/// Edges starting at `node_id`: its direct effects.
pub fn downstream<'g>(
    graph: &'g MechanismGraph,
    node_id: &str,
) -> Result<Vec<&'g Edge>, QueryError> {
    require_node(graph, node_id)?;
    Ok(graph.edges().iter().filter(|e| e.source == node_id).collect())
}

fn require_node(graph: &MechanismGraph, node_id: &str) -> Result<(), QueryError> {
    if graph.contains_node(node_id) {
        Ok(())
    } else {
        Err(QueryError::UnknownNode {
            node_id: node_id.to_string(),
        })
    }
}
