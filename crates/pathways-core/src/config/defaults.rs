// Single source of truth for all default values.

use crate::model::{EvidenceQuality, PathAlgorithm};

// --- Graph build ---
pub const DEFAULT_INCLUDE_DISCONNECTED: bool = false;
pub const DEFAULT_MIN_CONNECTIONS: usize = 0;

// --- Pathfinding ---
pub const DEFAULT_PATH_ALGORITHM: PathAlgorithm = PathAlgorithm::Shortest;
pub const DEFAULT_PATH_MAX_DEPTH: usize = 5;
pub const DEFAULT_MAX_PATHS: usize = 10;
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

// --- Crisis extraction ---
pub const DEFAULT_CRISIS_MAX_DEPTH: usize = 4;
pub const DEFAULT_CRISIS_MIN_EVIDENCE: EvidenceQuality = EvidenceQuality::C;

// --- Domain extraction ---
pub const DEFAULT_DOMAIN_MIN_CONNECTIONS: usize = 0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
