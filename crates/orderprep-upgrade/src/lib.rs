//! # orderprep-upgrade
//!
//! One-shot preparation for the order-entry upgrade: every distinct free-text
//! dose unit and frequency on legacy drug orders becomes a coded concept in
//! the "DOSING UNITS" or "DRUG ORDER FREQUENCIES" set, and the text-to-code
//! mapping is written to the upgrade settings file. A persisted run guard
//! makes repeated invocations no-ops once a run has succeeded.
//!
//! Concurrent invocations are unsupported: the guard is read, then written,
//! with no atomic check-and-set.

pub mod artifact;
pub mod dedup;
pub mod grouping;
pub mod mapping;
pub mod orchestrator;
pub mod report;
pub mod resolver;

pub use artifact::write_artifact;
pub use dedup::{add_distinct, collect_distinct, is_blank};
pub use grouping::attach_member;
pub use mapping::MappingBuffer;
pub use orchestrator::UpgradePreparation;
pub use report::PreparationReport;
pub use resolver::ConceptResolver;
