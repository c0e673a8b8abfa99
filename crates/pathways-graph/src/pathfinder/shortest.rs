//! Fewest hops first.
//!
//! Breadth-first over partial simple paths. Out-edges are expanded in edge
//! insertion order, so equal-length paths come out in discovery order.

use std::collections::VecDeque;

use super::adjacency::{Adjacency, Budget};

struct Partial {
    node: usize,
    nodes: Vec<usize>,
    edges: Vec<usize>,
}

pub(crate) fn search(
    adjacency: &Adjacency<'_>,
    source: usize,
    target: usize,
    max_depth: usize,
    max_paths: usize,
    budget: &mut Budget,
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(Partial {
        node: source,
        nodes: vec![source],
        edges: Vec::new(),
    });

    while let Some(partial) = queue.pop_front() {
        if partial.edges.len() >= max_depth {
            continue;
        }
        for &position in adjacency.out_edges(partial.node) {
            let next = adjacency.target_of(position);
            if partial.nodes.contains(&next) {
                continue;
            }
            if !budget.spend() {
                return found;
            }

            let mut edges = partial.edges.clone();
            edges.push(position);
            if next == target {
                found.push(edges);
                if found.len() >= max_paths {
                    return found;
                }
                continue;
            }

            let mut nodes = partial.nodes.clone();
            nodes.push(next);
            queue.push_back(Partial {
                node: next,
                nodes,
                edges,
            });
        }
    }
    found
}
