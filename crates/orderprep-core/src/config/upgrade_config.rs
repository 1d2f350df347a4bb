//! Upgrade preparation configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Project config file name looked up in the root passed to [`UpgradeConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "orderprep.toml";

/// Configuration for a preparation run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ORDERPREP_*`)
/// 2. Project config (`orderprep.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Directory the mapping artifact is written to.
    pub application_data_dir: Option<String>,
    /// Artifact file name. Default: `order_entry_upgrade_settings.txt`.
    pub settings_file_name: Option<String>,
    /// Run guard setting key.
    pub executed_property: Option<String>,
    /// Setting key holding the dosing units set uuid.
    pub dosing_units_property: Option<String>,
    /// SQLite database for the bundled storage backend.
    /// Default: `orderprep.db` in the application data directory.
    pub database_path: Option<String>,
    /// Locale tag for created concept names. Default: `en`.
    pub locale: Option<String>,
    /// Creator attribution for created rows.
    pub creator_user_id: Option<i64>,
    pub creator_username: Option<String>,
}

impl UpgradeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &UpgradeConfig) -> Result<(), ConfigError> {
        if let Some(ref name) = config.settings_file_name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "settings_file_name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::ValidationFailed {
                    field: "settings_file_name".to_string(),
                    message: "must be a file name, not a path".to_string(),
                });
            }
        }
        if let Some(ref locale) = config.locale {
            if locale.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "locale".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut UpgradeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: UpgradeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut UpgradeConfig, other: &UpgradeConfig) {
        if other.application_data_dir.is_some() {
            base.application_data_dir = other.application_data_dir.clone();
        }
        if other.settings_file_name.is_some() {
            base.settings_file_name = other.settings_file_name.clone();
        }
        if other.executed_property.is_some() {
            base.executed_property = other.executed_property.clone();
        }
        if other.dosing_units_property.is_some() {
            base.dosing_units_property = other.dosing_units_property.clone();
        }
        if other.database_path.is_some() {
            base.database_path = other.database_path.clone();
        }
        if other.locale.is_some() {
            base.locale = other.locale.clone();
        }
        if other.creator_user_id.is_some() {
            base.creator_user_id = other.creator_user_id;
        }
        if other.creator_username.is_some() {
            base.creator_username = other.creator_username.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ORDERPREP_APPLICATION_DATA_DIR`, `ORDERPREP_LOCALE`, etc.
    fn apply_env_overrides(config: &mut UpgradeConfig) {
        if let Ok(val) = std::env::var("ORDERPREP_APPLICATION_DATA_DIR") {
            config.application_data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_SETTINGS_FILE_NAME") {
            config.settings_file_name = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_EXECUTED_PROPERTY") {
            config.executed_property = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_DOSING_UNITS_PROPERTY") {
            config.dosing_units_property = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_DATABASE_PATH") {
            config.database_path = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_LOCALE") {
            config.locale = Some(val);
        }
        if let Ok(val) = std::env::var("ORDERPREP_CREATOR_USER_ID") {
            match val.parse::<i64>() {
                Ok(v) => config.creator_user_id = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring non-numeric ORDERPREP_CREATOR_USER_ID"),
            }
        }
        if let Ok(val) = std::env::var("ORDERPREP_CREATOR_USERNAME") {
            config.creator_username = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Application data directory, falling back to `~/.OpenMRS`.
    pub fn effective_application_data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.application_data_dir {
            return PathBuf::from(dir);
        }
        home_dir()
            .map(|h| h.join(constants::DEFAULT_APPLICATION_DATA_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_APPLICATION_DATA_DIR_NAME))
    }

    pub fn effective_settings_file_name(&self) -> &str {
        self.settings_file_name
            .as_deref()
            .unwrap_or(constants::SETTINGS_FILE_NAME)
    }

    /// Full path of the mapping artifact.
    pub fn settings_file_path(&self) -> PathBuf {
        self.effective_application_data_dir()
            .join(self.effective_settings_file_name())
    }

    /// SQLite database file, falling back to `orderprep.db` next to the artifact.
    pub fn effective_database_path(&self) -> PathBuf {
        match self.database_path {
            Some(ref path) => PathBuf::from(path),
            None => self
                .effective_application_data_dir()
                .join(constants::DEFAULT_DATABASE_FILE_NAME),
        }
    }

    pub fn effective_executed_property(&self) -> &str {
        self.executed_property
            .as_deref()
            .unwrap_or(constants::EXECUTED_PROPERTY)
    }

    pub fn effective_dosing_units_property(&self) -> &str {
        self.dosing_units_property
            .as_deref()
            .unwrap_or(constants::DOSING_UNITS_PROPERTY)
    }

    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(constants::DEFAULT_LOCALE)
    }

    pub fn effective_creator_user_id(&self) -> i64 {
        self.creator_user_id
            .unwrap_or(constants::DEFAULT_CREATOR_USER_ID)
    }

    pub fn effective_creator_username(&self) -> &str {
        self.creator_username
            .as_deref()
            .unwrap_or(constants::DEFAULT_CREATOR_USERNAME)
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
