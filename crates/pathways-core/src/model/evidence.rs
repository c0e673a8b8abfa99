//! Evidence quality grades and their numeric strength encoding.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BuildError;

/// Coarse confidence rating on a mechanism.
///
/// Ordering follows confidence: `C < B < A`, so `quality >= threshold`
/// reads as "at least as well supported as".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceQuality {
    /// Strong evidence (multiple consistent studies).
    A,
    /// Moderate evidence.
    B,
    /// Limited or emerging evidence.
    C,
}

impl EvidenceQuality {
    pub const ALL: [EvidenceQuality; 3] = [Self::A, Self::B, Self::C];

    /// Numeric strength used as the default path weight: A=3, B=2, C=1.
    pub fn strength(&self) -> u32 {
        match self {
            Self::A => 3,
            Self::B => 2,
            Self::C => 1,
        }
    }

    /// Whether this grade is at least as strong as `threshold`.
    pub fn meets(&self, threshold: EvidenceQuality) -> bool {
        self.strength() >= threshold.strength()
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl PartialOrd for EvidenceQuality {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvidenceQuality {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl FromStr for EvidenceQuality {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| BuildError::UnknownEvidenceQuality {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for EvidenceQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
