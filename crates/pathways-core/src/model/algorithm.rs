use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

/// Pathfinder strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Fewest hops first (breadth-first).
    #[default]
    Shortest,
    /// Highest summed evidence strength first.
    StrongestEvidence,
    /// Every simple path up to the depth bound, depth-first order.
    AllPaths,
}

impl PathAlgorithm {
    pub const ALL: [PathAlgorithm; 3] = [Self::Shortest, Self::StrongestEvidence, Self::AllPaths];

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "shortest" => Some(Self::Shortest),
            "strongest_evidence" | "strongest" => Some(Self::StrongestEvidence),
            "all_paths" | "all" => Some(Self::AllPaths),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::StrongestEvidence => "strongest_evidence",
            Self::AllPaths => "all_paths",
        }
    }
}

impl FromStr for PathAlgorithm {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| QueryError::UnknownAlgorithm {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
