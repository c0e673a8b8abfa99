//! Closed enumerations and mechanism records consumed by the graph engine.

pub mod algorithm;
pub mod category;
pub mod direction;
pub mod evidence;
pub mod mechanism;
pub mod scale;

pub use algorithm::PathAlgorithm;
pub use category::Category;
pub use direction::Direction;
pub use evidence::EvidenceQuality;
pub use mechanism::{MechanismRecord, RawMechanism};
pub use scale::Scale;
