//! Mechanism records: one causal pathway from a source node to a target node.
//!
//! `RawMechanism` is the loosely typed shape handed over by the record store.
//! `MechanismRecord` is the validated form the graph builder consumes; the
//! conversion fails fast with a `BuildError` rather than dropping fields.

use serde::{Deserialize, Serialize};

use super::{Category, Direction, EvidenceQuality, Scale};
use crate::errors::BuildError;

/// A validated causal mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismRecord {
    /// Unique mechanism identifier. Becomes the edge id.
    pub id: String,
    /// Display name of the pathway, e.g. "Alcohol consumption pathway".
    pub name: String,
    pub from_node_id: String,
    pub from_node_name: String,
    pub to_node_id: String,
    pub to_node_name: String,
    pub direction: Direction,
    pub category: Category,
    pub evidence_quality: EvidenceQuality,
    /// Number of studies backing this mechanism.
    #[serde(default)]
    pub study_count: u32,
    #[serde(default)]
    pub from_scale: Option<Scale>,
    #[serde(default)]
    pub to_scale: Option<Scale>,
    /// Explicit node categories. When absent, nodes inherit the mechanism category.
    #[serde(default)]
    pub from_category: Option<Category>,
    #[serde(default)]
    pub to_category: Option<Category>,
}

impl MechanismRecord {
    /// Minimal constructor: node names default to their ids, mechanism name to `id`.
    pub fn new(
        id: impl Into<String>,
        from_node_id: impl Into<String>,
        to_node_id: impl Into<String>,
        direction: Direction,
        category: Category,
        evidence_quality: EvidenceQuality,
    ) -> Self {
        let id = id.into();
        let from_node_id = from_node_id.into();
        let to_node_id = to_node_id.into();
        Self {
            name: id.clone(),
            from_node_name: from_node_id.clone(),
            to_node_name: to_node_id.clone(),
            id,
            from_node_id,
            to_node_id,
            direction,
            category,
            evidence_quality,
            study_count: 0,
            from_scale: None,
            to_scale: None,
            from_category: None,
            to_category: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_node_names(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_node_name = from.into();
        self.to_node_name = to.into();
        self
    }

    pub fn with_scales(mut self, from: Option<Scale>, to: Option<Scale>) -> Self {
        self.from_scale = from;
        self.to_scale = to;
        self
    }

    pub fn with_study_count(mut self, study_count: u32) -> Self {
        self.study_count = study_count;
        self
    }

    /// Structural checks that the type system cannot express.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.id.trim().is_empty() {
            return Err(BuildError::MissingField {
                mechanism_id: String::new(),
                field: "id",
            });
        }
        if self.from_node_id.trim().is_empty() {
            return Err(BuildError::MissingField {
                mechanism_id: self.id.clone(),
                field: "from_node_id",
            });
        }
        if self.to_node_id.trim().is_empty() {
            return Err(BuildError::MissingField {
                mechanism_id: self.id.clone(),
                field: "to_node_id",
            });
        }
        if self.from_node_id == self.to_node_id {
            return Err(BuildError::SelfReference {
                mechanism_id: self.id.clone(),
                node_id: self.from_node_id.clone(),
            });
        }
        Ok(())
    }

    /// Category of the source node.
    pub fn source_category(&self) -> Category {
        self.from_category.unwrap_or(self.category)
    }

    /// Category of the target node.
    pub fn target_category(&self) -> Category {
        self.to_category.unwrap_or(self.category)
    }
}

/// A mechanism as delivered by the record store, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMechanism {
    pub id: Option<String>,
    pub name: Option<String>,
    pub from_node_id: Option<String>,
    pub from_node_name: Option<String>,
    pub to_node_id: Option<String>,
    pub to_node_name: Option<String>,
    pub direction: Option<String>,
    pub category: Option<String>,
    pub evidence_quality: Option<String>,
    pub study_count: Option<u32>,
    pub from_scale: Option<u8>,
    pub to_scale: Option<u8>,
    pub from_category: Option<String>,
    pub to_category: Option<String>,
}

fn required(
    value: Option<String>,
    mechanism_id: &str,
    field: &'static str,
) -> Result<String, BuildError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BuildError::MissingField {
            mechanism_id: mechanism_id.to_string(),
            field,
        }),
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl TryFrom<RawMechanism> for MechanismRecord {
    type Error = BuildError;

    fn try_from(raw: RawMechanism) -> Result<Self, Self::Error> {
        let id = required(raw.id, "", "id")?;
        let from_node_id = required(raw.from_node_id, &id, "from_node_id")?;
        let to_node_id = required(raw.to_node_id, &id, "to_node_id")?;
        let direction: Direction = required(raw.direction, &id, "direction")?.parse()?;
        let category: Category = required(raw.category, &id, "category")?.parse()?;
        let evidence_quality: EvidenceQuality =
            required(raw.evidence_quality, &id, "evidence_quality")?.parse()?;

        let from_scale = raw.from_scale.map(Scale::new).transpose()?;
        let to_scale = raw.to_scale.map(Scale::new).transpose()?;
        let from_category = raw.from_category.map(|c| c.parse()).transpose()?;
        let to_category = raw.to_category.map(|c| c.parse()).transpose()?;

        let record = MechanismRecord {
            name: non_empty_or(raw.name, &id),
            from_node_name: non_empty_or(raw.from_node_name, &from_node_id),
            to_node_name: non_empty_or(raw.to_node_name, &to_node_id),
            id,
            from_node_id,
            to_node_id,
            direction,
            category,
            evidence_quality,
            study_count: raw.study_count.unwrap_or(0),
            from_scale,
            to_scale,
            from_category,
            to_category,
        };
        record.validate()?;
        Ok(record)
    }
}
