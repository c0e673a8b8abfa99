//! Engine configuration, loaded from TOML. Every section is optional.

pub mod crisis_config;
pub mod defaults;
pub mod domain_config;
pub mod graph_config;
pub mod observability_config;
pub mod pathfinding_config;

use serde::{Deserialize, Serialize};

pub use crisis_config::CrisisConfig;
pub use domain_config::DomainConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use pathfinding_config::PathfindingConfig;

use crate::constants::{MAX_CRISIS_DEPTH, MIN_CRISIS_DEPTH};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwaysConfig {
    pub graph: GraphConfig,
    pub pathfinding: PathfindingConfig,
    pub crisis: CrisisConfig,
    pub domain: DomainConfig,
    pub observability: ObservabilityConfig,
}

impl PathwaysConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Reject values the engine would refuse at query time anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CRISIS_DEPTH..=MAX_CRISIS_DEPTH).contains(&self.crisis.max_depth) {
            return Err(ConfigError::InvalidValue {
                key: "crisis.max_depth",
                reason: format!(
                    "{} not in {MIN_CRISIS_DEPTH}..={MAX_CRISIS_DEPTH}",
                    self.crisis.max_depth
                ),
            });
        }
        if self.pathfinding.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pathfinding.max_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.pathfinding.max_paths == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pathfinding.max_paths",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.pathfinding.max_candidates == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pathfinding.max_candidates",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
