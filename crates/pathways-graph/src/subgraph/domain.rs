//! Keyword-driven domain subgraph (e.g. an alcohol or diabetes slice).
//!
//! Keywords select mechanisms before the graph is built; connectivity pruning
//! then runs on the already reduced edge set.

use pathways_core::config::DomainConfig;
use pathways_core::{BuildError, MechanismRecord};
use tracing::debug;

use crate::builder::{build_graph, validate_records, BuildOptions};
use crate::graph::MechanismGraph;
use crate::pruning::filter_by_min_connections;

/// Domain extraction settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainOptions {
    /// Builder settings for the selected mechanisms.
    pub build: BuildOptions,
    /// Post-filter connectivity threshold. 0 and 1 disable pruning.
    pub min_connections: usize,
}

impl From<&DomainConfig> for DomainOptions {
    fn from(config: &DomainConfig) -> Self {
        Self {
            build: BuildOptions::default(),
            min_connections: config.min_connections,
        }
    }
}

/// Lower-cased, non-blank keywords.
fn normalize<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Whether the mechanism name or either endpoint name contains a keyword.
/// `keywords` must already be lower-cased.
pub fn matches_keywords(record: &MechanismRecord, keywords: &[String]) -> bool {
    let fields = [
        record.name.to_lowercase(),
        record.from_node_name.to_lowercase(),
        record.to_node_name.to_lowercase(),
    ];
    keywords
        .iter()
        .any(|k| fields.iter().any(|field| field.contains(k.as_str())))
}

/// Build the subgraph of mechanisms matching any keyword.
///
/// The whole record batch is validated first. An empty (or all-blank) keyword
/// list selects nothing and yields an empty graph.
pub fn extract_domain_subgraph<S: AsRef<str>>(
    records: &[MechanismRecord],
    keywords: &[S],
    options: &DomainOptions,
) -> Result<MechanismGraph, BuildError> {
    validate_records(records)?;

    let keywords = normalize(keywords);
    let selected: Vec<MechanismRecord> = records
        .iter()
        .filter(|r| matches_keywords(r, &keywords))
        .cloned()
        .collect();

    let graph = build_graph(&selected, &options.build)?;
    let graph = filter_by_min_connections(&graph, options.min_connections);

    debug!(
        keywords = ?keywords,
        selected = selected.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "extracted domain subgraph"
    );
    Ok(graph)
}
