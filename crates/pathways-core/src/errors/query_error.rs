/// Invalid request against an otherwise valid graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("source and target are the same node: {node_id}")]
    SameEndpoints { node_id: String },

    #[error("node not found in graph: {node_id}")]
    UnknownNode { node_id: String },

    #[error("invalid bound {name}={value}: {reason}")]
    InvalidBound {
        name: &'static str,
        value: usize,
        reason: String,
    },

    #[error("unknown path algorithm: {value}")]
    UnknownAlgorithm { value: String },

    #[error("no crisis endpoints given")]
    NoEndpoints,
}
