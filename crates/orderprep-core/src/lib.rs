//! # orderprep-core
//!
//! Foundation crate for the order-entry upgrade preparation.
//! Defines models, collaborator traits, errors, config, tracing and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::UpgradeConfig;
pub use errors::{ConfigError, StorageError, UpgradeError};
pub use models::{Concept, ConceptName, ConceptSetMember, DrugOrder, User};
