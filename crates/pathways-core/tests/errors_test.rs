use pathways_core::errors::*;

#[test]
fn build_error_unknown_category_carries_value() {
    let err = BuildError::UnknownCategory {
        value: "astrology".into(),
    };
    assert!(err.to_string().contains("astrology"));
}

#[test]
fn build_error_missing_field_carries_mechanism_and_field() {
    let err = BuildError::MissingField {
        mechanism_id: "m-42".into(),
        field: "category",
    };
    let msg = err.to_string();
    assert!(msg.contains("m-42"));
    assert!(msg.contains("category"));
}

#[test]
fn query_error_same_endpoints_carries_node() {
    let err = QueryError::SameEndpoints {
        node_id: "poverty".into(),
    };
    assert!(err.to_string().contains("poverty"));
}

#[test]
fn pathways_error_wraps_subsystem_errors() {
    let err: PathwaysError = QueryError::UnknownNode {
        node_id: "ghost".into(),
    }
    .into();
    assert!(err.is_invalid_request());
    assert!(err.to_string().contains("ghost"));

    let err: PathwaysError = BuildError::DuplicateMechanism {
        mechanism_id: "m1".into(),
    }
    .into();
    assert!(!err.is_invalid_request());
    assert!(matches!(err, PathwaysError::Build(_)));
}
