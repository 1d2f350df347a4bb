use crate::errors::StorageError;

/// Global key-value settings.
pub trait ISettingsStore: Send + Sync {
    fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value for `key`.
    fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
