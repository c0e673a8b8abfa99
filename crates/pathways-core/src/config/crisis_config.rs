use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::EvidenceQuality;

/// Upstream traversal settings for crisis subgraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrisisConfig {
    /// Upstream hops from each endpoint, 1-8.
    pub max_depth: usize,
    /// Edges weaker than this grade are not followed.
    pub min_evidence: EvidenceQuality,
}

impl Default for CrisisConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_CRISIS_MAX_DEPTH,
            min_evidence: defaults::DEFAULT_CRISIS_MIN_EVIDENCE,
        }
    }
}
