//! Strongest-evidence ranking.
//!
//! Score is the sum of edge strengths (A=3, B=2, C=1). Paths are ordered by
//! score descending, then hop count ascending, then depth-first discovery order.

use super::adjacency::{walk_simple_paths, Adjacency, Budget};

pub(crate) fn score(adjacency: &Adjacency<'_>, path: &[usize]) -> u32 {
    path.iter().map(|&p| adjacency.edge(p).strength).sum()
}

pub(crate) fn search(
    adjacency: &Adjacency<'_>,
    source: usize,
    target: usize,
    max_depth: usize,
    max_paths: usize,
    budget: &mut Budget,
) -> Vec<Vec<usize>> {
    let mut candidates: Vec<(u32, Vec<usize>)> = Vec::new();
    let mut collect = |path: &[usize]| {
        candidates.push((score(adjacency, path), path.to_vec()));
        true
    };
    walk_simple_paths(adjacency, source, target, max_depth, budget, &mut collect);

    // Stable sort keeps discovery order among equal keys.
    candidates.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.len().cmp(&b.len()))
    });
    candidates
        .into_iter()
        .take(max_paths)
        .map(|(_, path)| path)
        .collect()
}
