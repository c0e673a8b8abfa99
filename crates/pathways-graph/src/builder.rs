//! Mechanism records → `MechanismGraph`.
//!
//! The node universe is every node any record references. Edges are the
//! records passing the category allow-list. Isolated nodes are dropped after
//! that filter unless `include_disconnected` is set, so a node reachable only
//! through an excluded category disappears.

use std::collections::{HashMap, HashSet};

use pathways_core::config::GraphConfig;
use pathways_core::{BuildError, Category, MechanismRecord, RawMechanism};
use tracing::debug;

use crate::graph::{ConnectionCounts, Edge, MechanismGraph, Node};

/// Builder settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOptions {
    /// Category allow-list. Empty means every category.
    pub categories: Vec<Category>,
    /// Keep nodes left without edges by the category filter.
    pub include_disconnected: bool,
}

impl BuildOptions {
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_disconnected(mut self, include: bool) -> Self {
        self.include_disconnected = include;
        self
    }

    fn admits(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

impl From<&GraphConfig> for BuildOptions {
    fn from(config: &GraphConfig) -> Self {
        Self {
            categories: config.categories.clone(),
            include_disconnected: config.include_disconnected,
        }
    }
}

/// Reject the batch on the first malformed or duplicate record.
pub fn validate_records(records: &[MechanismRecord]) -> Result<(), BuildError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.id.as_str()) {
            return Err(BuildError::DuplicateMechanism {
                mechanism_id: record.id.clone(),
            });
        }
    }
    Ok(())
}

/// Build a graph from validated records.
pub fn build_graph(
    records: &[MechanismRecord],
    options: &BuildOptions,
) -> Result<MechanismGraph, BuildError> {
    validate_records(records)?;

    let mut nodes: Vec<Node> = Vec::new();
    // Parallel to `nodes`: whether the category came from a node declaration.
    let mut declared: Vec<bool> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut register = |id: &str, label: &str, explicit: Option<Category>, fallback, scale| {
        match position.get(id) {
            Some(&i) => {
                let node: &mut Node = &mut nodes[i];
                if node.label.trim().is_empty() && !label.trim().is_empty() {
                    node.label = label.to_string();
                }
                if let (false, Some(category)) = (declared[i], explicit) {
                    node.category = category;
                    declared[i] = true;
                }
                if node.scale.is_none() {
                    node.scale = scale;
                }
            }
            None => {
                position.insert(id.to_string(), nodes.len());
                declared.push(explicit.is_some());
                nodes.push(Node {
                    id: id.to_string(),
                    label: label.to_string(),
                    category: explicit.unwrap_or(fallback),
                    scale,
                    connections: ConnectionCounts::default(),
                });
            }
        }
    };

    let mut edges = Vec::new();
    for record in records {
        register(
            &record.from_node_id,
            &record.from_node_name,
            record.from_category,
            record.category,
            record.from_scale,
        );
        register(
            &record.to_node_id,
            &record.to_node_name,
            record.to_category,
            record.category,
            record.to_scale,
        );
        if options.admits(record.category) {
            edges.push(edge_from_record(record));
        }
    }

    for node in &mut nodes {
        if node.label.trim().is_empty() {
            node.label = node.id.clone();
        }
    }

    let graph = MechanismGraph::from_parts(nodes, edges);
    let graph = if options.include_disconnected {
        graph
    } else {
        graph.restrict_to_nodes(|n| !n.is_isolated())
    };

    debug!(
        records = records.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built mechanism graph"
    );
    Ok(graph)
}

/// Validate raw store rows, then build. Fails on the first bad row.
pub fn build_graph_from_raw(
    raw: &[RawMechanism],
    options: &BuildOptions,
) -> Result<MechanismGraph, BuildError> {
    let records = raw
        .iter()
        .cloned()
        .map(MechanismRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    build_graph(&records, options)
}

fn edge_from_record(record: &MechanismRecord) -> Edge {
    Edge {
        id: record.id.clone(),
        label: record.name.clone(),
        source: record.from_node_id.clone(),
        target: record.to_node_id.clone(),
        direction: record.direction,
        category: record.category,
        evidence: record.evidence_quality,
        strength: record.evidence_quality.strength(),
        study_count: record.study_count,
    }
}
