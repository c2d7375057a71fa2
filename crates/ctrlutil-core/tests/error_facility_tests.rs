use std::collections::HashSet;

use ctrlutil_core::errors::{ErrorKind, ErrorReport, UtilError};
use ctrlutil_core_types::Side;

#[test]
fn test_not_an_object_verifiable_by_kind() {
    let err = UtilError::NotAnObject {
        side: Side::Right,
        found: "number",
    };

    let report: ErrorReport = err.into();

    assert_eq!(report.kind(), ErrorKind::NotAnObject);
    assert_eq!(report.code(), "ERR_NOT_AN_OBJECT");
    assert_eq!(report.key(), Some("right"));
    assert!(report.message().contains("found number"));
}

#[test]
fn test_unknown_field_carries_key() {
    let report: ErrorReport = UtilError::UnknownField {
        key: "balance".to_string(),
    }
    .into();

    assert_eq!(report.code(), "ERR_UNKNOWN_FIELD");
    assert_eq!(report.key(), Some("balance"));
}

#[test]
fn test_invalid_branch_has_its_own_code() {
    let report: ErrorReport = UtilError::InvalidBranch {
        value: "Prefix::Unknown".to_string(),
    }
    .into();

    assert_eq!(report.kind(), ErrorKind::InvalidBranch);
    assert_eq!(report.code(), "ERR_INVALID_BRANCH");
    assert_ne!(report.code(), ErrorKind::ShapeMismatch.code());
    assert!(report.message().contains("Should be detected during compilation"));
}

#[test]
fn test_report_builder_and_display() {
    let report = ErrorReport::new(ErrorKind::ShapeMismatch)
        .with_op("shape_validate")
        .with_key("address")
        .with_message("missing required field address");

    assert_eq!(report.op(), Some("shape_validate"));

    let display = report.to_string();
    assert!(display.contains("ERR_SHAPE_MISMATCH"));
    assert!(display.contains("shape_validate"));
    assert!(display.contains("(key: address)"));
}

#[test]
fn test_all_error_kinds_have_unique_codes() {
    let kinds = [
        ErrorKind::NotAnObject,
        ErrorKind::UnknownField,
        ErrorKind::DuplicateField,
        ErrorKind::ShapeMismatch,
        ErrorKind::InvalidBranch,
        ErrorKind::Serialization,
    ];

    let codes: HashSet<_> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());

    for code in codes {
        assert!(code.starts_with("ERR_"));
    }
}
