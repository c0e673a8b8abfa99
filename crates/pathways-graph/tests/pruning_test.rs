//! Cascading connectivity pruning.

use pathways_core::{Category, Direction, EvidenceQuality, MechanismRecord};
use pathways_graph::{
    build_graph, filter_by_min_connections, prune_with_report, BuildOptions, MechanismGraph,
};

fn graph_of(pairs: &[(&str, &str)]) -> MechanismGraph {
    let records: Vec<MechanismRecord> = pairs
        .iter()
        .enumerate()
        .map(|(i, (from, to))| {
            MechanismRecord::new(
                format!("m{i}"),
                *from,
                *to,
                Direction::Positive,
                Category::Economic,
                EvidenceQuality::B,
            )
        })
        .collect();
    build_graph(&records, &BuildOptions::default()).unwrap()
}

#[test]
fn chain_collapses_completely_at_threshold_two() {
    let chain = graph_of(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")]);
    let report = prune_with_report(&chain, 2);

    assert!(report.graph.is_empty());
    assert_eq!(report.graph.edge_count(), 0);
    // Ends peel off one layer per pass: {A,E}, {B,D}, {C}.
    assert_eq!(report.passes, 3);
    assert_eq!(report.nodes_removed, 5);
    assert_eq!(report.edges_removed, 4);
}

#[test]
fn triangle_survives_threshold_two() {
    let triangle = graph_of(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let pruned = filter_by_min_connections(&triangle, 2);
    assert_eq!(pruned, triangle);
    assert_eq!(prune_with_report(&triangle, 2).passes, 0);
}

#[test]
fn hub_goes_once_its_spokes_are_pruned() {
    // H has degree 3, but every neighbour has degree 1.
    let star = graph_of(&[("H", "x"), ("H", "y"), ("z", "H")]);
    let report = prune_with_report(&star, 2);

    assert!(report.graph.is_empty());
    assert_eq!(report.passes, 2);
}

#[test]
fn threshold_zero_and_one_are_identity() {
    let chain = graph_of(&[("A", "B"), ("B", "C")]);
    assert_eq!(filter_by_min_connections(&chain, 0), chain);
    assert_eq!(filter_by_min_connections(&chain, 1), chain);
    assert_eq!(prune_with_report(&chain, 1).passes, 0);
}

#[test]
fn pendant_is_removed_but_cycle_kept() {
    let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "tail")]);
    let pruned = filter_by_min_connections(&graph, 2);

    assert_eq!(pruned.node_count(), 3);
    assert_eq!(pruned.edge_count(), 3);
    assert!(!pruned.contains_node("tail"));
    // C lost its edge to the tail.
    assert_eq!(pruned.node("C").unwrap().connections.total(), 2);
}

#[test]
fn survivors_meet_threshold() {
    // K4 on A..D (every node degree 3) plus a pendant E hanging off A.
    let graph = graph_of(&[
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "C"),
        ("B", "D"),
        ("C", "D"),
        ("E", "A"),
    ]);
    let pruned = filter_by_min_connections(&graph, 3);

    assert_eq!(pruned.node_count(), 4);
    assert_eq!(pruned.edge_count(), 6);
    for node in pruned.nodes() {
        assert!(node.weight() >= 3, "{} has weight {}", node.id, node.weight());
    }
}

#[test]
fn pruning_empty_graph_is_empty() {
    let report = prune_with_report(&MechanismGraph::new(), 4);
    assert!(report.graph.is_empty());
    assert_eq!(report.passes, 0);
}
