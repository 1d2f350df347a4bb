//! Configuration for the upgrade preparation.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod upgrade_config;

pub use upgrade_config::UpgradeConfig;
