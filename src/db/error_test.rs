//! Tests for data-access error types.

use crate::db::DbError;
use crate::remote::BackendError;

#[test]
fn backend_error_displays_message_unchanged() {
    let err = DbError::from(BackendError::new("permission denied for table clients"));
    assert_eq!(err.to_string(), "permission denied for table clients");
}

#[test]
fn invalid_row_error_names_entity() {
    let err = DbError::InvalidRow {
        entity: "project",
        message: "missing field `team`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid project row: missing field `team`"
    );
}

#[test]
fn encode_error_displays_correctly() {
    let err = DbError::Encode {
        entity: "card",
        message: "key must be a string".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to encode card: key must be a string");
}

#[test]
fn not_found_is_detected_only_for_no_rows_code() {
    assert!(DbError::from(BackendError::no_rows(0)).is_not_found());
    assert!(!DbError::from(BackendError::new("boom").with_code("42501")).is_not_found());
    assert!(
        !DbError::InvalidRow {
            entity: "client",
            message: "bad".to_string()
        }
        .is_not_found()
    );
}
