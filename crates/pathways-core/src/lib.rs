//! # pathways-core
//!
//! Foundation crate for the causal mechanism network.
//! Defines the closed enumerations, mechanism records, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;

// Re-export the most commonly used types at the crate root.
pub use config::PathwaysConfig;
pub use errors::{BuildError, ConfigError, PathwaysError, PathwaysResult, QueryError};
pub use model::{
    Category, Direction, EvidenceQuality, MechanismRecord, PathAlgorithm, RawMechanism, Scale,
};
