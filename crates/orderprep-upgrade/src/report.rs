//! Outcome of a preparation run.

use std::path::PathBuf;

use crate::mapping::MappingBuffer;

/// What a run did. `run()` collapses this to [`PreparationReport::succeeded`].
#[derive(Debug, Clone, Default)]
pub struct PreparationReport {
    /// The run guard was already set; nothing else was done.
    pub already_executed: bool,
    pub dosing_units_set_id: Option<i64>,
    pub frequencies_set_id: Option<i64>,
    /// Distinct dose unit texts, first-seen order.
    pub dose_units: Vec<String>,
    /// Distinct frequency texts, first-seen order.
    pub frequencies: Vec<String>,
    /// Set memberships added across both sets.
    pub members_attached: usize,
    pub mapping: MappingBuffer,
    pub artifact_path: Option<PathBuf>,
    pub artifact_written: bool,
}

impl PreparationReport {
    pub fn already_executed() -> Self {
        Self {
            already_executed: true,
            ..Self::default()
        }
    }

    /// True when the guard was already set or the settings file was written.
    pub fn succeeded(&self) -> bool {
        self.already_executed || self.artifact_written
    }
}
