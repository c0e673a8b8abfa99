use super::{BuildError, ConfigError, QueryError};

/// Top-level error for every fallible engine operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathwaysError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("invalid request: {0}")]
    Query(#[from] QueryError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl PathwaysError {
    /// Whether the caller sent a request the graph cannot answer.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

pub type PathwaysResult<T> = Result<T, PathwaysError>;
