//! Tests for UpgradeConfig: TOML parsing, validation, project file loading, defaults.

use std::path::PathBuf;

use orderprep_core::config::upgrade_config::PROJECT_CONFIG_FILE;
use orderprep_core::constants;
use orderprep_core::errors::ConfigError;
use orderprep_core::traits::{IUserContext, StaticUserContext};
use orderprep_core::UpgradeConfig;

#[test]
fn defaults_resolve_to_compiled_constants() {
    let config = UpgradeConfig::default();
    assert_eq!(config.effective_settings_file_name(), constants::SETTINGS_FILE_NAME);
    assert_eq!(config.effective_executed_property(), constants::EXECUTED_PROPERTY);
    assert_eq!(
        config.effective_dosing_units_property(),
        constants::DOSING_UNITS_PROPERTY
    );
    assert_eq!(config.effective_locale(), "en");
    assert_eq!(config.effective_creator_user_id(), 1);
    assert_eq!(config.effective_creator_username(), "admin");
}

#[test]
fn settings_file_path_joins_dir_and_name() {
    let config = UpgradeConfig::from_toml(
        r#"
        application_data_dir = "/var/lib/openmrs"
        settings_file_name = "mapping.txt"
        "#,
    )
    .unwrap();
    assert_eq!(
        config.settings_file_path(),
        PathBuf::from("/var/lib/openmrs").join("mapping.txt")
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let config = UpgradeConfig::from_toml(
        r#"
        locale = "fr"
        not_a_real_key = 42
        "#,
    )
    .unwrap();
    assert_eq!(config.effective_locale(), "fr");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = UpgradeConfig::from_toml("locale = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn file_name_with_separator_fails_validation() {
    let config = UpgradeConfig::from_toml(r#"settings_file_name = "sub/mapping.txt""#).unwrap();
    let err = UpgradeConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "settings_file_name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_locale_fails_validation() {
    let config = UpgradeConfig::from_toml(r#"locale = "  ""#).unwrap();
    assert!(UpgradeConfig::validate(&config).is_err());
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        r#"
        executed_property = "custom.executed"
        creator_user_id = 7
        "#,
    )
    .unwrap();

    let config = UpgradeConfig::load(dir.path()).unwrap();
    assert_eq!(config.effective_executed_property(), "custom.executed");
    assert_eq!(config.effective_creator_user_id(), 7);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = UpgradeConfig::load(dir.path()).unwrap();
    assert_eq!(config.effective_executed_property(), constants::EXECUTED_PROPERTY);
}

#[test]
fn toml_roundtrip_preserves_values() {
    let config = UpgradeConfig::from_toml(
        r#"
        database_path = "/tmp/orders.db"
        locale = "sw"
        "#,
    )
    .unwrap();
    let reparsed = UpgradeConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.database_path.as_deref(), Some("/tmp/orders.db"));
    assert_eq!(reparsed.effective_locale(), "sw");
}

#[test]
fn static_context_from_config() {
    let config = UpgradeConfig::from_toml(
        r#"
        creator_user_id = 3
        creator_username = "migrator"
        locale = "fr"
        "#,
    )
    .unwrap();
    let ctx = StaticUserContext::from_config(&config);
    let user = ctx.authenticated_user().unwrap();
    assert_eq!(user.user_id, 3);
    assert_eq!(user.username, "migrator");
    assert_eq!(ctx.locale(), "fr");
}

#[test]
fn database_path_defaults_next_to_the_artifact() {
    let config = UpgradeConfig::from_toml(r#"application_data_dir = "/var/lib/openmrs""#).unwrap();
    assert_eq!(
        config.effective_database_path(),
        PathBuf::from("/var/lib/openmrs").join(constants::DEFAULT_DATABASE_FILE_NAME)
    );

    let config = UpgradeConfig::from_toml(r#"database_path = "/srv/orders.db""#).unwrap();
    assert_eq!(config.effective_database_path(), PathBuf::from("/srv/orders.db"));
}
