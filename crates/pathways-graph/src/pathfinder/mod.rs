//! Multi-strategy path search between two named nodes.
//!
//! All strategies share one out-edge index restricted to the edges the query
//! admits (category include / exclude) and one candidate budget that bounds
//! the number of partial paths explored.

mod adjacency;
mod enumerate;
mod shortest;
mod strongest;

use pathways_core::config::{defaults, PathfindingConfig};
use pathways_core::{Category, Direction, QueryError};
use serde::Serialize;
use tracing::{debug, warn};

pub use pathways_core::PathAlgorithm;

use crate::graph::{Edge, MechanismGraph};
use adjacency::{Adjacency, Budget};

/// A path search request.
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery {
    pub source: String,
    pub target: String,
    pub algorithm: PathAlgorithm,
    /// Maximum edges per path.
    pub max_depth: usize,
    /// Maximum paths returned.
    pub max_paths: usize,
    /// Maximum partial paths explored.
    pub max_candidates: usize,
    /// When non-empty, every edge must be in one of these categories.
    pub include_categories: Vec<Category>,
    /// No edge may be in one of these categories.
    pub exclude_categories: Vec<Category>,
}

impl PathQuery {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            algorithm: defaults::DEFAULT_PATH_ALGORITHM,
            max_depth: defaults::DEFAULT_PATH_MAX_DEPTH,
            max_paths: defaults::DEFAULT_MAX_PATHS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            include_categories: Vec::new(),
            exclude_categories: Vec::new(),
        }
    }

    /// Request with bounds taken from configuration.
    pub fn from_config(
        source: impl Into<String>,
        target: impl Into<String>,
        config: &PathfindingConfig,
    ) -> Self {
        Self {
            algorithm: config.algorithm,
            max_depth: config.max_depth,
            max_paths: config.max_paths,
            max_candidates: config.max_candidates,
            ..Self::new(source, target)
        }
    }

    pub fn with_algorithm(mut self, algorithm: PathAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn including(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.include_categories = categories.into_iter().collect();
        self
    }

    pub fn excluding(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.exclude_categories = categories.into_iter().collect();
        self
    }

    /// Whether a path may use `edge`.
    pub fn admits(&self, edge: &Edge) -> bool {
        (self.include_categories.is_empty() || self.include_categories.contains(&edge.category))
            && !self.exclude_categories.contains(&edge.category)
    }

    fn validate(&self, graph: &MechanismGraph) -> Result<(), QueryError> {
        if self.source == self.target {
            return Err(QueryError::SameEndpoints {
                node_id: self.source.clone(),
            });
        }
        for id in [&self.source, &self.target] {
            if !graph.contains_node(id) {
                return Err(QueryError::UnknownNode {
                    node_id: id.clone(),
                });
            }
        }
        for (name, value) in [
            ("max_depth", self.max_depth),
            ("max_paths", self.max_paths),
            ("max_candidates", self.max_candidates),
        ] {
            if value == 0 {
                return Err(QueryError::InvalidBound {
                    name,
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One directed path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Edges in traversal order.
    pub edges: Vec<Edge>,
    /// Node ids in traversal order, source first.
    pub nodes: Vec<String>,
    /// Product of the edge direction signs.
    pub net_direction: Direction,
    /// Sum of edge strengths.
    pub evidence_score: u32,
}

impl PathResult {
    fn from_edges(edges: Vec<Edge>) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        if let Some(first) = edges.first() {
            nodes.push(first.source.clone());
        }
        nodes.extend(edges.iter().map(|e| e.target.clone()));

        let net_direction = edges
            .iter()
            .fold(Direction::Positive, |acc, e| acc.combine(e.direction));
        let evidence_score = edges.iter().map(|e| e.strength).sum();

        Self {
            edges,
            nodes,
            net_direction,
            evidence_score,
        }
    }

    /// Number of edges.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn is_net_positive(&self) -> bool {
        self.net_direction == Direction::Positive
    }

    pub fn edge_ids(&self) -> Vec<&str> {
        self.edges.iter().map(|e| e.id.as_str()).collect()
    }
}

/// Outcome of a successful search. An empty `paths` list means no path
/// exists within the bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSearch {
    pub source: String,
    pub target: String,
    pub algorithm: PathAlgorithm,
    pub paths: Vec<PathResult>,
    /// The candidate budget ran out before the search finished.
    pub truncated: bool,
}

impl PathSearch {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Find directed paths from `query.source` to `query.target`.
pub fn find_paths(graph: &MechanismGraph, query: &PathQuery) -> Result<PathSearch, QueryError> {
    query.validate(graph)?;

    let adjacency = Adjacency::new(graph, |e| query.admits(e));
    let locate = |id: &str| {
        adjacency.node(id).ok_or_else(|| QueryError::UnknownNode {
            node_id: id.to_string(),
        })
    };
    let source = locate(&query.source)?;
    let target = locate(&query.target)?;

    let mut budget = Budget::new(query.max_candidates);
    let (depth, limit) = (query.max_depth, query.max_paths);
    let sequences = match query.algorithm {
        PathAlgorithm::Shortest => {
            shortest::search(&adjacency, source, target, depth, limit, &mut budget)
        }
        PathAlgorithm::StrongestEvidence => {
            strongest::search(&adjacency, source, target, depth, limit, &mut budget)
        }
        PathAlgorithm::AllPaths => {
            enumerate::search(&adjacency, source, target, depth, limit, &mut budget)
        }
    };

    let paths: Vec<PathResult> = sequences
        .into_iter()
        .map(|positions| {
            let edges = positions.into_iter().map(|p| adjacency.edge(p).clone());
            PathResult::from_edges(edges.collect())
        })
        .collect();

    if budget.exhausted() {
        warn!(
            source = %query.source,
            target = %query.target,
            max_candidates = query.max_candidates,
            "path search hit candidate budget, results may be incomplete"
        );
    }
    debug!(
        source = %query.source,
        target = %query.target,
        algorithm = %query.algorithm,
        found = paths.len(),
        "path search finished"
    );

    Ok(PathSearch {
        source: query.source.clone(),
        target: query.target.clone(),
        algorithm: query.algorithm,
        paths,
        truncated: budget.exhausted(),
    })
}
