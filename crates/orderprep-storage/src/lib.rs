//! # orderprep-storage
//!
//! SQLite backend for the dictionary, settings and drug-order collaborators.
//! Single serialized connection, versioned migrations, plain query functions.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use orderprep_core::errors::StorageError;

/// Convert a message into a `StorageError::SqliteError`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::SqliteError {
        message: message.into(),
    }
}
