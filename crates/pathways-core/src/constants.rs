// Hard limits shared by the builder, extractors, and config validation.

/// Lowest position in the structural → crisis hierarchy.
pub const MIN_SCALE: u8 = 1;
/// Highest position in the structural → crisis hierarchy (crisis endpoints).
pub const MAX_SCALE: u8 = 7;

/// Smallest accepted upstream traversal depth for crisis extraction.
pub const MIN_CRISIS_DEPTH: usize = 1;
/// Largest accepted upstream traversal depth for crisis extraction.
pub const MAX_CRISIS_DEPTH: usize = 8;

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "PATHWAYS_LOG";
