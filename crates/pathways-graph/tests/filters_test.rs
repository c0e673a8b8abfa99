//! Category and scale filters, node search, direct causes and effects.

use pathways_core::{Category, Direction, EvidenceQuality, MechanismRecord, QueryError, Scale};
use pathways_graph::{
    build_graph, downstream, filter_by_category, filter_by_scale, search_nodes, upstream,
    BuildOptions, MechanismGraph,
};

fn scale(v: u8) -> Option<Scale> {
    Some(Scale::new(v).unwrap())
}

/// income(2) -> housing(3) -> stress(4) -> bp(5), plus income -> bp as biological.
fn sample() -> MechanismGraph {
    let records = vec![
        MechanismRecord::new(
            "m1",
            "income",
            "housing",
            Direction::Negative,
            Category::Economic,
            EvidenceQuality::A,
        )
        .with_node_names("Household Income", "Housing Instability")
        .with_scales(scale(2), scale(3)),
        MechanismRecord::new(
            "m2",
            "housing",
            "stress",
            Direction::Positive,
            Category::SocialEnvironment,
            EvidenceQuality::B,
        )
        .with_node_names("Housing Instability", "Chronic Stress")
        .with_scales(scale(3), scale(4)),
        MechanismRecord::new(
            "m3",
            "stress",
            "bp",
            Direction::Positive,
            Category::Biological,
            EvidenceQuality::B,
        )
        .with_node_names("Chronic Stress", "Blood Pressure")
        .with_scales(scale(4), scale(5)),
        MechanismRecord::new(
            "m4",
            "income",
            "bp",
            Direction::Negative,
            Category::Biological,
            EvidenceQuality::C,
        ),
    ];
    build_graph(&records, &BuildOptions::default()).unwrap()
}

#[test]
fn empty_category_selection_is_identity() {
    let graph = sample();
    assert_eq!(filter_by_category(&graph, &[]), graph);
}

#[test]
fn empty_scale_selection_is_identity() {
    let graph = sample();
    assert_eq!(filter_by_scale(&graph, &[]), graph);
}

#[test]
fn category_filter_keeps_only_referenced_nodes() {
    let graph = sample();
    let reduced = filter_by_category(&graph, &[Category::Biological]);

    let ids: Vec<&str> = reduced.edges().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["m3", "m4"]);
    assert_eq!(reduced.node_count(), 3);
    assert!(!reduced.contains_node("housing"));
    // Counts are recomputed against the reduced edge set.
    assert_eq!(reduced.node("bp").unwrap().connections.incoming, 2);
    assert_eq!(reduced.node("income").unwrap().connections.outgoing, 1);
}

#[test]
fn scale_filter_drops_edges_leaving_the_selection() {
    let graph = sample();
    let reduced = filter_by_scale(&graph, &[Scale::new(3).unwrap(), Scale::new(4).unwrap()]);

    assert_eq!(reduced.node_count(), 2);
    assert_eq!(reduced.edge_count(), 1);
    assert_eq!(reduced.edges()[0].id, "m2");
}

#[test]
fn scale_filter_keeps_nodes_even_without_edges() {
    let graph = sample();
    let reduced = filter_by_scale(&graph, &[Scale::new(2).unwrap()]);

    assert_eq!(reduced.node_count(), 1);
    assert_eq!(reduced.edge_count(), 0);
    assert!(reduced.node("income").unwrap().is_isolated());
}

#[test]
fn filters_on_empty_graph_stay_empty() {
    let empty = MechanismGraph::new();
    assert!(filter_by_category(&empty, &[Category::Economic]).is_empty());
    assert!(filter_by_scale(&empty, &[Scale::new(7).unwrap()]).is_empty());
}

#[test]
fn search_matches_id_and_label_case_insensitively() {
    let graph = sample();

    let hits: Vec<&str> = search_nodes(&graph, "HOUSING")
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(hits, vec!["housing"]);

    let by_label: Vec<&str> = search_nodes(&graph, "pressure")
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(by_label, vec!["bp"]);

    assert!(search_nodes(&graph, "   ").is_empty());
}

#[test]
fn upstream_and_downstream_list_direct_edges() {
    let graph = sample();

    let causes: Vec<&str> = upstream(&graph, "bp")
        .unwrap()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(causes, vec!["m3", "m4"]);

    let effects: Vec<&str> = downstream(&graph, "income")
        .unwrap()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(effects, vec!["m1", "m4"]);

    assert!(downstream(&graph, "bp").unwrap().is_empty());
    assert_eq!(
        upstream(&graph, "nowhere").unwrap_err(),
        QueryError::UnknownNode {
            node_id: "nowhere".to_string()
        }
    );
}
