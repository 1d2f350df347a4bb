//! Stable error codes for log correlation.

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_DATATYPE: &str = "MISSING_DATATYPE";
pub const MISSING_CONCEPT_CLASS: &str = "MISSING_CONCEPT_CLASS";

/// Maps an error to a stable, machine-readable code.
pub trait OrderprepErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, the form used in log lines.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
