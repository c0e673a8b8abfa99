//! Property tests over random mechanism networks.

use std::collections::HashSet;

use proptest::prelude::*;

use pathways_core::{Category, Direction, EvidenceQuality, MechanismRecord, Scale};
use pathways_graph::pathfinder::PathAlgorithm;
use pathways_graph::{
    build_graph, extract_crisis_subgraph, filter_by_category, filter_by_min_connections,
    filter_by_scale, find_paths, BuildOptions, CrisisOptions, MechanismGraph, PathQuery,
};

type RawEdge = (usize, usize, usize, usize, bool);

/// Random records over `n` nodes. Self loops are skipped; ids are unique.
fn build_random(n: usize, edges: &[RawEdge]) -> MechanismGraph {
    let records: Vec<MechanismRecord> = edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| edge.0 % n != edge.1 % n)
        .map(|(i, &(src, tgt, cat, grade, negative))| {
            let (src, tgt) = (src % n, tgt % n);
            let direction = if negative {
                Direction::Negative
            } else {
                Direction::Positive
            };
            MechanismRecord::new(
                format!("m{i}"),
                format!("n{src}"),
                format!("n{tgt}"),
                direction,
                Category::ALL[cat % Category::COUNT],
                EvidenceQuality::ALL[grade % 3],
            )
            .with_scales(
                Scale::new((src % 7) as u8 + 1).ok(),
                Scale::new((tgt % 7) as u8 + 1).ok(),
            )
        })
        .collect();
    build_graph(&records, &BuildOptions::default()).unwrap()
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<RawEdge>> {
    prop::collection::vec((0..n, 0..n, 0..7usize, 0..3usize, any::<bool>()), 0..n * 3)
}

fn assert_well_formed(graph: &MechanismGraph) -> Result<(), TestCaseError> {
    let ids: HashSet<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    prop_assert_eq!(ids.len(), graph.node_count(), "duplicate node ids");
    for edge in graph.edges() {
        prop_assert!(ids.contains(edge.source.as_str()), "dangling source {}", edge.source);
        prop_assert!(ids.contains(edge.target.as_str()), "dangling target {}", edge.target);
    }
    for node in graph.nodes() {
        let incoming = graph.edges().iter().filter(|e| e.target == node.id).count();
        let outgoing = graph.edges().iter().filter(|e| e.source == node.id).count();
        prop_assert_eq!(node.connections.incoming, incoming, "incoming of {}", node.id);
        prop_assert_eq!(node.connections.outgoing, outgoing, "outgoing of {}", node.id);
    }
    Ok(())
}

proptest! {
    #[test]
    fn built_graphs_are_well_formed(edges in edge_strategy(15)) {
        let graph = build_random(15, &edges);
        assert_well_formed(&graph)?;
        for node in graph.nodes() {
            prop_assert!(!node.is_isolated());
        }
    }

    #[test]
    fn reductions_stay_well_formed(
        edges in edge_strategy(15),
        cat in 0..7usize,
        scale in 1..=7u8,
        k in 0..5usize,
    ) {
        let graph = build_random(15, &edges);
        assert_well_formed(&filter_by_category(&graph, &[Category::ALL[cat]]))?;
        assert_well_formed(&filter_by_scale(&graph, &[Scale::new(scale).unwrap()]))?;
        assert_well_formed(&filter_by_min_connections(&graph, k))?;
    }

    #[test]
    fn empty_selections_are_identity(edges in edge_strategy(12)) {
        let graph = build_random(12, &edges);
        prop_assert_eq!(filter_by_category(&graph, &[]), graph.clone());
        prop_assert_eq!(filter_by_scale(&graph, &[]), graph);
    }

    #[test]
    fn pruning_reaches_a_fixed_point(edges in edge_strategy(15), k in 2..5usize) {
        let graph = build_random(15, &edges);
        let pruned = filter_by_min_connections(&graph, k);
        for node in pruned.nodes() {
            prop_assert!(node.weight() >= k, "{} has weight {} < {}", node.id, node.weight(), k);
        }
        prop_assert_eq!(filter_by_min_connections(&pruned, k), pruned);
    }

    #[test]
    fn paths_respect_bounds(
        edges in edge_strategy(10),
        algo in 0..3usize,
        max_depth in 1..6usize,
        max_paths in 1..8usize,
    ) {
        let graph = build_random(10, &edges);
        prop_assume!(graph.node_count() >= 2);
        let source = graph.nodes()[0].id.clone();
        let target = graph.nodes()[graph.node_count() - 1].id.clone();
        let algorithm = [
            PathAlgorithm::Shortest,
            PathAlgorithm::StrongestEvidence,
            PathAlgorithm::AllPaths,
        ][algo];

        let query = PathQuery::new(source.clone(), target.clone())
            .with_algorithm(algorithm)
            .with_max_depth(max_depth)
            .with_max_paths(max_paths);
        let search = find_paths(&graph, &query).unwrap();

        prop_assert!(search.paths.len() <= max_paths);
        for path in &search.paths {
            prop_assert!(path.hops() >= 1 && path.hops() <= max_depth);
            prop_assert_eq!(path.nodes.first(), Some(&source));
            prop_assert_eq!(path.nodes.last(), Some(&target));
            let distinct: HashSet<&String> = path.nodes.iter().collect();
            prop_assert_eq!(distinct.len(), path.nodes.len(), "path revisits a node");
            for pair in path.edges.windows(2) {
                prop_assert_eq!(&pair[0].target, &pair[1].source);
            }
        }
        if algorithm == PathAlgorithm::Shortest {
            for pair in search.paths.windows(2) {
                prop_assert!(pair[0].hops() <= pair[1].hops());
            }
        }
        if algorithm == PathAlgorithm::StrongestEvidence {
            for pair in search.paths.windows(2) {
                prop_assert!(pair[0].evidence_score >= pair[1].evidence_score);
            }
        }
    }

    #[test]
    fn crisis_levers_have_no_incoming_edges(
        edges in edge_strategy(15),
        depth in 1..=8usize,
        grade in 0..3usize,
    ) {
        let graph = build_random(15, &edges);
        prop_assume!(!graph.is_empty());
        let endpoint = graph.nodes()[0].id.clone();
        let options = CrisisOptions {
            max_depth: depth,
            min_evidence: EvidenceQuality::ALL[grade],
        };
        let sub = extract_crisis_subgraph(&graph, &[endpoint.as_str()], &options).unwrap();

        assert_well_formed(&sub.graph)?;
        prop_assert!(sub.graph.contains_node(&endpoint));
        for node in &sub.nodes {
            prop_assert!(node.depth <= depth);
            let has_incoming = sub.graph.edges().iter().any(|e| e.target == node.node.id);
            prop_assert_eq!(node.policy_lever, !has_incoming);
        }
        for edge in sub.graph.edges() {
            prop_assert!(edge.evidence.meets(options.min_evidence));
        }
    }
}
