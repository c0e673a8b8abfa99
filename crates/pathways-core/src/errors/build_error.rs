/// Malformed mechanism input. The whole build is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unknown category: {value}")]
    UnknownCategory { value: String },

    #[error("unknown evidence quality: {value} (expected A, B or C)")]
    UnknownEvidenceQuality { value: String },

    #[error("unknown direction: {value} (expected positive or negative)")]
    UnknownDirection { value: String },

    #[error("mechanism '{mechanism_id}' is missing required field '{field}'")]
    MissingField {
        mechanism_id: String,
        field: &'static str,
    },

    #[error("duplicate mechanism id: {mechanism_id}")]
    DuplicateMechanism { mechanism_id: String },

    #[error("scale {value} out of range 1-7")]
    ScaleOutOfRange { value: u8 },

    #[error("mechanism '{mechanism_id}' links node '{node_id}' to itself")]
    SelfReference {
        mechanism_id: String,
        node_id: String,
    },
}
