//! All simple paths, depth-first, truncated at `max_paths`.

use super::adjacency::{walk_simple_paths, Adjacency, Budget};

pub(crate) fn search(
    adjacency: &Adjacency<'_>,
    source: usize,
    target: usize,
    max_depth: usize,
    max_paths: usize,
    budget: &mut Budget,
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let mut collect = |path: &[usize]| {
        found.push(path.to_vec());
        found.len() < max_paths
    };
    walk_simple_paths(adjacency, source, target, max_depth, budget, &mut collect);
    found
}
