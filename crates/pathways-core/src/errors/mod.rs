//! Error taxonomy: build errors reject a whole graph build, query errors reject
//! a single request, config errors reject a configuration document.
//! Empty results are never errors.

mod build_error;
mod config_error;
mod pathways_error;
mod query_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use pathways_error::{PathwaysError, PathwaysResult};
pub use query_error::QueryError;
