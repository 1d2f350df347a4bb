use orderprep_core::errors::error_code;
use orderprep_core::errors::{ConfigError, OrderprepErrorCode, StorageError, UpgradeError};

#[test]
fn wrapped_errors_keep_their_subsystem_code() {
    let err: UpgradeError = StorageError::NotFound {
        entity: "concept",
        id: "42".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::NOT_FOUND);

    let err: UpgradeError = ConfigError::ValidationFailed {
        field: "locale".to_string(),
        message: "must not be empty".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn coded_message_prefixes_the_code() {
    let err = UpgradeError::MissingConceptClass {
        name: "Drug".to_string(),
    };
    assert_eq!(
        err.coded_message(),
        "[MISSING_CONCEPT_CLASS] concept class not found: Drug"
    );
}

#[test]
fn migration_failure_names_the_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        message: "no such table".to_string(),
    };
    assert_eq!(err.error_code(), error_code::MIGRATION_FAILED);
    assert!(err.to_string().contains("version 2"));
}
