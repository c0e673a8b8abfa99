use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword-based domain subgraph settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Post-filter connectivity threshold. 0 and 1 disable pruning.
    pub min_connections: usize,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            min_connections: defaults::DEFAULT_DOMAIN_MIN_CONNECTIONS,
        }
    }
}
