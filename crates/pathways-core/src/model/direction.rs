use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BuildError;

/// Sign of a causal effect: does more of the source mean more or less of the target?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// +1 for positive, -1 for negative.
    pub fn sign(&self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// Compose two effects along a chain. Two negatives make a positive.
    pub fn combine(self, other: Direction) -> Direction {
        if self.sign() * other.sign() > 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl FromStr for Direction {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| BuildError::UnknownDirection {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
