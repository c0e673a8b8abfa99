//! Out-edge index over the edges a query admits, plus the bounded simple-path walk
//! shared by the depth-first strategies.

use std::collections::HashMap;

use crate::graph::{Edge, MechanismGraph};

/// Dense node numbering with per-node out-edge lists in edge insertion order.
pub(crate) struct Adjacency<'g> {
    graph: &'g MechanismGraph,
    index: HashMap<&'g str, usize>,
    /// Edge positions (into `graph.edges()`) leaving each node.
    out: Vec<Vec<usize>>,
    /// Dense target node of each edge position.
    targets: Vec<usize>,
}

impl<'g> Adjacency<'g> {
    pub(crate) fn new(graph: &'g MechanismGraph, admits: impl Fn(&Edge) -> bool) -> Self {
        let index: HashMap<&str, usize> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();

        let mut out = vec![Vec::new(); graph.node_count()];
        let mut targets = vec![usize::MAX; graph.edge_count()];
        for (position, edge) in graph.edges().iter().enumerate() {
            let (Some(&s), Some(&t)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                continue;
            };
            targets[position] = t;
            if admits(edge) {
                out[s].push(position);
            }
        }

        Self {
            graph,
            index,
            out,
            targets,
        }
    }

    pub(crate) fn node(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.out.len()
    }

    pub(crate) fn out_edges(&self, node: usize) -> &[usize] {
        &self.out[node]
    }

    pub(crate) fn target_of(&self, position: usize) -> usize {
        self.targets[position]
    }

    pub(crate) fn edge(&self, position: usize) -> &'g Edge {
        &self.graph.edges()[position]
    }
}

/// Caps the number of partial paths a search may create.
pub(crate) struct Budget {
    remaining: usize,
    exhausted: bool,
}

impl Budget {
    pub(crate) fn new(max_candidates: usize) -> Self {
        Self {
            remaining: max_candidates,
            exhausted: false,
        }
    }

    /// Take one unit. Returns false once the budget is spent.
    pub(crate) fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            self.exhausted = true;
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Depth-first walk over simple paths from `source` to `target` with at most
/// `max_depth` edges. `on_path` receives each complete path as edge positions
/// and returns false to stop the walk.
pub(crate) fn walk_simple_paths(
    adjacency: &Adjacency<'_>,
    source: usize,
    target: usize,
    max_depth: usize,
    budget: &mut Budget,
    on_path: &mut dyn FnMut(&[usize]) -> bool,
) {
    let mut visited = vec![false; adjacency.node_count()];
    let mut path = Vec::with_capacity(max_depth);
    visited[source] = true;
    descend(
        adjacency, source, target, max_depth, &mut visited, &mut path, budget, on_path,
    );
}

#[allow(clippy::too_many_arguments)]
fn descend(
    adjacency: &Adjacency<'_>,
    current: usize,
    target: usize,
    max_depth: usize,
    visited: &mut [bool],
    path: &mut Vec<usize>,
    budget: &mut Budget,
    on_path: &mut dyn FnMut(&[usize]) -> bool,
) -> bool {
    if path.len() >= max_depth {
        return true;
    }
    for &position in adjacency.out_edges(current) {
        let next = adjacency.target_of(position);
        if visited[next] {
            continue;
        }
        if !budget.spend() {
            return false;
        }

        path.push(position);
        let keep_going = if next == target {
            on_path(path.as_slice())
        } else {
            visited[next] = true;
            let keep_going = descend(
                adjacency, next, target, max_depth, visited, path, budget, on_path,
            );
            visited[next] = false;
            keep_going
        };
        path.pop();

        if !keep_going {
            return false;
        }
    }
    true
}
