//! NetworkEngine: applies configured defaults to the pure graph operations.
//!
//! The engine holds configuration only. Every call receives fresh records or a
//! graph and returns a new value, so one engine can serve any number of callers.

use pathways_core::{
    Category, MechanismRecord, PathwaysConfig, PathwaysResult, RawMechanism, Scale,
};
use tracing::info;

use crate::builder::{build_graph, build_graph_from_raw, BuildOptions};
use crate::filters::{filter_by_category, filter_by_scale};
use crate::graph::MechanismGraph;
use crate::metrics::{rank_nodes, GraphStats, RankedNode};
use crate::pathfinder::{find_paths, PathQuery, PathSearch};
use crate::pruning::filter_by_min_connections;
use crate::subgraph::crisis::{extract_crisis_subgraph, CrisisOptions, CrisisSubgraph};
use crate::subgraph::domain::{extract_domain_subgraph, DomainOptions};

/// The network query engine.
#[derive(Debug, Clone, Default)]
pub struct NetworkEngine {
    config: PathwaysConfig,
}

impl NetworkEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a validated configuration.
    pub fn with_config(config: PathwaysConfig) -> PathwaysResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse, validate, and adopt a TOML configuration document.
    pub fn from_toml(toml: &str) -> PathwaysResult<Self> {
        Ok(Self {
            config: PathwaysConfig::from_toml(toml)?,
        })
    }

    pub fn config(&self) -> &PathwaysConfig {
        &self.config
    }

    // --- Building ---

    /// Build the network with the configured category allow-list and
    /// connectivity threshold.
    pub fn build(&self, records: &[MechanismRecord]) -> PathwaysResult<MechanismGraph> {
        let graph = build_graph(records, &BuildOptions::from(&self.config.graph))?;
        Ok(self.apply_min_connections(graph))
    }

    /// Same as [`build`](Self::build), from unvalidated store rows.
    pub fn build_from_raw(&self, raw: &[RawMechanism]) -> PathwaysResult<MechanismGraph> {
        let graph = build_graph_from_raw(raw, &BuildOptions::from(&self.config.graph))?;
        Ok(self.apply_min_connections(graph))
    }

    fn apply_min_connections(&self, graph: MechanismGraph) -> MechanismGraph {
        let threshold = self.config.graph.min_connections;
        let pruned = filter_by_min_connections(&graph, threshold);
        info!(
            nodes = pruned.node_count(),
            edges = pruned.edge_count(),
            min_connections = threshold,
            "network built"
        );
        pruned
    }

    // --- Reductions ---

    /// Category then scale filter, then connectivity pruning, in that order.
    pub fn view(
        &self,
        graph: &MechanismGraph,
        categories: &[Category],
        scales: &[Scale],
        min_connections: usize,
    ) -> MechanismGraph {
        let reduced = filter_by_category(graph, categories);
        let reduced = filter_by_scale(&reduced, scales);
        filter_by_min_connections(&reduced, min_connections)
    }

    /// Keyword slice of the records, pruned with the configured domain threshold.
    pub fn domain_subgraph<S: AsRef<str>>(
        &self,
        records: &[MechanismRecord],
        keywords: &[S],
    ) -> PathwaysResult<MechanismGraph> {
        let options = DomainOptions {
            build: BuildOptions::from(&self.config.graph),
            ..DomainOptions::from(&self.config.domain)
        };
        let graph = extract_domain_subgraph(records, keywords, &options)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "domain subgraph extracted"
        );
        Ok(graph)
    }

    /// Upstream chain of the given crisis endpoints with configured depth and evidence floor.
    pub fn crisis_subgraph<S: AsRef<str>>(
        &self,
        graph: &MechanismGraph,
        endpoints: &[S],
    ) -> PathwaysResult<CrisisSubgraph> {
        let subgraph =
            extract_crisis_subgraph(graph, endpoints, &CrisisOptions::from(&self.config.crisis))?;
        info!(
            nodes = subgraph.stats.node_count,
            levers = subgraph.stats.policy_lever_count,
            "crisis subgraph extracted"
        );
        Ok(subgraph)
    }

    // --- Ranking ---

    pub fn ranked_nodes(&self, graph: &MechanismGraph, limit: Option<usize>) -> Vec<RankedNode> {
        rank_nodes(graph, limit)
    }

    pub fn stats(&self, graph: &MechanismGraph) -> GraphStats {
        GraphStats::compute(graph)
    }

    // --- Pathfinding ---

    /// Paths between two nodes using the configured algorithm and bounds.
    pub fn find_paths(
        &self,
        graph: &MechanismGraph,
        source: &str,
        target: &str,
    ) -> PathwaysResult<PathSearch> {
        let query = PathQuery::from_config(source, target, &self.config.pathfinding);
        self.find_paths_with(graph, &query)
    }

    /// Paths for a fully specified request.
    pub fn find_paths_with(
        &self,
        graph: &MechanismGraph,
        query: &PathQuery,
    ) -> PathwaysResult<PathSearch> {
        let search = find_paths(graph, query)?;
        info!(
            source = %query.source,
            target = %query.target,
            paths = search.paths.len(),
            "paths found"
        );
        Ok(search)
    }
}
