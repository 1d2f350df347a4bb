//! Upgrade preparation errors.

use super::error_code::{self, OrderprepErrorCode};
use super::{ConfigError, StorageError};

/// Fatal errors of a preparation run. Aggregates subsystem errors via `From`.
///
/// Artifact write failures are not represented here: they surface as an
/// unsuccessful run, not as an error.
#[derive(Debug, thiserror::Error)]
pub enum UpgradeError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("concept datatype not found: {name}")]
    MissingDatatype { name: String },

    #[error("concept class not found: {name}")]
    MissingConceptClass { name: String },
}

impl OrderprepErrorCode for UpgradeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::MissingDatatype { .. } => error_code::MISSING_DATATYPE,
            Self::MissingConceptClass { .. } => error_code::MISSING_CONCEPT_CLASS,
        }
    }
}

pub type UpgradeResult<T> = Result<T, UpgradeError>;
