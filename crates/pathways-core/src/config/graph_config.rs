use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::Category;

/// Defaults applied when building the full network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Category allow-list. Empty means every category.
    pub categories: Vec<Category>,
    /// Keep nodes that end up with no edges after category filtering.
    pub include_disconnected: bool,
    /// Connectivity threshold applied after building. 0 and 1 disable pruning.
    pub min_connections: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            include_disconnected: defaults::DEFAULT_INCLUDE_DISCONNECTED,
            min_connections: defaults::DEFAULT_MIN_CONNECTIONS,
        }
    }
}
