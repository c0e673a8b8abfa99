//! The 7 mechanism categories. Closed set: unknown names are a build error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BuildError;

/// Domain a causal mechanism (and the nodes it touches) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Income, employment, wealth, housing cost.
    Economic,
    /// Social support, discrimination, community cohesion.
    SocialEnvironment,
    /// Policy, governance, legal structures.
    Political,
    /// Individual behaviours such as diet, alcohol, tobacco.
    Behavioral,
    /// Physiological states and disease processes.
    Biological,
    /// Housing quality, transport, neighbourhood infrastructure.
    BuiltEnvironment,
    /// Coverage, availability, and use of care.
    HealthcareAccess,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 7;

    /// All variants for iteration.
    pub const ALL: [Category; 7] = [
        Self::Economic,
        Self::SocialEnvironment,
        Self::Political,
        Self::Behavioral,
        Self::Biological,
        Self::BuiltEnvironment,
        Self::HealthcareAccess,
    ];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "economic" => Some(Self::Economic),
            "social_environment" => Some(Self::SocialEnvironment),
            "political" => Some(Self::Political),
            "behavioral" => Some(Self::Behavioral),
            "biological" => Some(Self::Biological),
            "built_environment" => Some(Self::BuiltEnvironment),
            "healthcare_access" => Some(Self::HealthcareAccess),
            _ => None,
        }
    }

    /// String name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economic => "economic",
            Self::SocialEnvironment => "social_environment",
            Self::Political => "political",
            Self::Behavioral => "behavioral",
            Self::Biological => "biological",
            Self::BuiltEnvironment => "built_environment",
            Self::HealthcareAccess => "healthcare_access",
        }
    }

    /// Human-readable label for tables and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Economic => "Economic",
            Self::SocialEnvironment => "Social Environment",
            Self::Political => "Political",
            Self::Behavioral => "Behavioral",
            Self::Biological => "Biological",
            Self::BuiltEnvironment => "Built Environment",
            Self::HealthcareAccess => "Healthcare Access",
        }
    }
}

impl FromStr for Category {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| BuildError::UnknownCategory {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
