//! Error handling for orderprep.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod storage_error;
pub mod upgrade_error;

pub use config_error::ConfigError;
pub use error_code::OrderprepErrorCode;
pub use storage_error::StorageError;
pub use upgrade_error::{UpgradeError, UpgradeResult};
