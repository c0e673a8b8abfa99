use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCALE, MIN_SCALE};
use crate::errors::BuildError;

/// Position in the structural (1) → crisis (7) hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scale(u8);

impl Scale {
    pub fn new(value: u8) -> Result<Self, BuildError> {
        if (MIN_SCALE..=MAX_SCALE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BuildError::ScaleOutOfRange { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Scale 7 nodes are crisis endpoints.
    pub fn is_crisis(&self) -> bool {
        self.0 == MAX_SCALE
    }
}

impl TryFrom<u8> for Scale {
    type Error = BuildError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
