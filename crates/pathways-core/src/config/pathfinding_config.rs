use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::PathAlgorithm;

/// Pathfinder bounds used when a request does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfindingConfig {
    pub algorithm: PathAlgorithm,
    /// Maximum number of edges in a returned path.
    pub max_depth: usize,
    /// Maximum number of paths returned.
    pub max_paths: usize,
    /// Maximum partial paths explored before the search gives up.
    pub max_candidates: usize,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            algorithm: defaults::DEFAULT_PATH_ALGORITHM,
            max_depth: defaults::DEFAULT_PATH_MAX_DEPTH,
            max_paths: defaults::DEFAULT_MAX_PATHS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
        }
    }
}
