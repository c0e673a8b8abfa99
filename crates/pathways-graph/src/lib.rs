//! # pathways-graph
//!
//! The network engine. Builds an immutable node/edge graph from mechanism
//! records, derives reduced graphs (category/scale filters, cascading
//! connectivity pruning, domain and crisis subgraphs), ranks nodes, and finds
//! paths between them. Every operation is a pure function of its inputs.

pub mod builder;
pub mod engine;
pub mod filters;
pub mod graph;
pub mod metrics;
pub mod pathfinder;
pub mod pruning;
pub mod subgraph;

pub use builder::{build_graph, build_graph_from_raw, BuildOptions};
pub use engine::NetworkEngine;
pub use filters::{filter_by_category, filter_by_scale};
pub use graph::lookup::{downstream, search_nodes, upstream};
pub use graph::{ConnectionCounts, Edge, MechanismGraph, Node};
pub use metrics::{rank_nodes, GraphStats, RankedNode};
pub use pathfinder::{find_paths, PathQuery, PathResult, PathSearch};
pub use pruning::{filter_by_min_connections, prune_with_report, PruneReport};
pub use subgraph::crisis::{
    crisis_endpoints, extract_crisis_subgraph, CrisisNode, CrisisOptions, CrisisStats,
    CrisisSubgraph,
};
pub use subgraph::domain::{extract_domain_subgraph, DomainOptions};
