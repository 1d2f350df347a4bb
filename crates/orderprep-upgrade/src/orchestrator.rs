//! Top-level control flow of the preparation run.

use std::path::PathBuf;

use orderprep_core::config::UpgradeConfig;
use orderprep_core::constants::{
    DEFAULT_DOSING_UNITS_SET_UUID, DEFAULT_SORT_WEIGHT, DOSING_UNITS_SET_NAME,
    FREQUENCIES_SET_NAME, FREQUENCIES_SET_UUID,
};
use orderprep_core::errors::{OrderprepErrorCode, UpgradeResult};
use orderprep_core::models::Concept;
use orderprep_core::traits::{IConceptStore, IDrugOrderSource, ISettingsStore, IUserContext};

use crate::artifact::write_artifact;
use crate::dedup::{add_distinct, is_blank};
use crate::grouping::attach_member;
use crate::mapping::MappingBuffer;
use crate::report::PreparationReport;
use crate::resolver::ConceptResolver;

const GUARD_SET: &str = "true";

/// Drives one preparation run against the given collaborators.
pub struct UpgradePreparation<'a> {
    concepts: &'a dyn IConceptStore,
    settings: &'a dyn ISettingsStore,
    orders: &'a dyn IDrugOrderSource,
    context: &'a dyn IUserContext,
    config: UpgradeConfig,
}

impl<'a> UpgradePreparation<'a> {
    pub fn new(
        concepts: &'a dyn IConceptStore,
        settings: &'a dyn ISettingsStore,
        orders: &'a dyn IDrugOrderSource,
        context: &'a dyn IUserContext,
        config: UpgradeConfig,
    ) -> Self {
        Self {
            concepts,
            settings,
            orders,
            context,
            config,
        }
    }

    /// Where the mapping file will be written.
    pub fn artifact_path(&self) -> PathBuf {
        self.config.settings_file_path()
    }

    /// Run the preparation. `Ok(true)` when it completed now or earlier,
    /// `Ok(false)` when the settings file could not be written.
    pub fn run(&self) -> UpgradeResult<bool> {
        match self.run_with_report() {
            Ok(report) => Ok(report.succeeded()),
            Err(e) => {
                tracing::error!(error = %e.coded_message(), "upgrade preparation aborted");
                Err(e)
            }
        }
    }

    /// Run the preparation and report what happened.
    ///
    /// Storage failures and missing concept metadata abort the run with an
    /// error and leave the guard unset.
    pub fn run_with_report(&self) -> UpgradeResult<PreparationReport> {
        let guard_key = self.config.effective_executed_property();
        if self.already_executed()? {
            tracing::info!(guard = guard_key, "upgrade preparation already executed, skipping");
            return Ok(PreparationReport::already_executed());
        }

        let resolver = ConceptResolver::new(self.concepts, self.context);
        let dosing_units_set = self.resolve_dosing_units_set(&resolver)?;
        let frequencies_set =
            resolver.resolve(FREQUENCIES_SET_NAME, Some(FREQUENCIES_SET_UUID), true)?;

        let (dose_units, frequencies) = self.collect_distinct_values()?;
        tracing::info!(
            dose_units = dose_units.len(),
            frequencies = frequencies.len(),
            "collected distinct drug order texts"
        );

        let mut report = PreparationReport {
            dosing_units_set_id: dosing_units_set.concept_id,
            frequencies_set_id: frequencies_set.concept_id,
            ..PreparationReport::default()
        };
        let mut mapping = MappingBuffer::new();

        report.members_attached +=
            self.add_members(&resolver, dosing_units_set, &dose_units, &mut mapping)?;
        report.members_attached +=
            self.add_members(&resolver, frequencies_set, &frequencies, &mut mapping)?;

        let artifact_path = self.artifact_path();
        report.artifact_written = write_artifact(&artifact_path, &mapping);
        if report.artifact_written {
            self.settings.set_setting(guard_key, GUARD_SET)?;
            tracing::info!(
                path = %artifact_path.display(),
                members = report.members_attached,
                "upgrade preparation complete"
            );
        } else {
            tracing::warn!(
                path = %artifact_path.display(),
                "settings file not written, run guard left unset"
            );
        }

        report.dose_units = dose_units;
        report.frequencies = frequencies;
        report.mapping = mapping;
        report.artifact_path = Some(artifact_path);
        Ok(report)
    }

    fn already_executed(&self) -> UpgradeResult<bool> {
        let value = self
            .settings
            .get_setting(self.config.effective_executed_property())?;
        Ok(value.as_deref() == Some(GUARD_SET))
    }

    /// A configured uuid is authoritative and left as is. Without one the
    /// default uuid is used and written back to the setting.
    fn resolve_dosing_units_set(&self, resolver: &ConceptResolver<'_>) -> UpgradeResult<Concept> {
        let key = self.config.effective_dosing_units_property();
        let configured = self
            .settings
            .get_setting(key)?
            .filter(|uuid| !is_blank(uuid));

        match configured {
            Some(uuid) => {
                tracing::debug!(uuid = %uuid, "using configured dosing units set");
                resolver.resolve(DOSING_UNITS_SET_NAME, Some(uuid.as_str()), true)
            }
            None => {
                let set = resolver.resolve(
                    DOSING_UNITS_SET_NAME,
                    Some(DEFAULT_DOSING_UNITS_SET_UUID),
                    true,
                )?;
                self.settings.set_setting(key, DEFAULT_DOSING_UNITS_SET_UUID)?;
                tracing::debug!(
                    uuid = DEFAULT_DOSING_UNITS_SET_UUID,
                    "using default dosing units set"
                );
                Ok(set)
            }
        }
    }

    fn collect_distinct_values(&self) -> UpgradeResult<(Vec<String>, Vec<String>)> {
        let mut dose_units = Vec::new();
        let mut frequencies = Vec::new();
        for order in self.orders.get_drug_orders()?.iter().flatten() {
            add_distinct(&mut dose_units, order.units.as_deref());
            add_distinct(&mut frequencies, order.frequency.as_deref());
        }
        Ok((dose_units, frequencies))
    }

    /// Create a member concept per text, attach it to `set`, record its code.
    /// Returns the number of members attached. Once an attach yields no set,
    /// later members are still created and mapped but stay unattached.
    /// Member concepts carry no stable uuid, so a rerun after a partial run
    /// creates them again.
    fn add_members(
        &self,
        resolver: &ConceptResolver<'_>,
        set: Concept,
        texts: &[String],
        mapping: &mut MappingBuffer,
    ) -> UpgradeResult<usize> {
        let mut set = Some(set);
        let mut attached = 0;
        for text in texts {
            let member = resolver.resolve(text, None, false)?;
            set = attach_member(
                self.concepts,
                self.context,
                set,
                Some(&member),
                Some(DEFAULT_SORT_WEIGHT),
            )?;
            if set.is_some() {
                attached += 1;
            }
            mapping.append(text, member.concept_id);
        }
        Ok(attached)
    }
}
