//! Lookup-or-create of coded concepts.

use chrono::Utc;

use orderprep_core::constants::{CONCEPT_CLASS_DRUG, CONCEPT_DATATYPE_TEXT};
use orderprep_core::errors::{UpgradeError, UpgradeResult};
use orderprep_core::models::{Concept, ConceptName};
use orderprep_core::traits::{IConceptStore, IUserContext};

use crate::dedup::is_blank;

/// Resolves concepts by optional stable uuid, creating them when absent.
pub struct ConceptResolver<'a> {
    store: &'a dyn IConceptStore,
    context: &'a dyn IUserContext,
}

impl<'a> ConceptResolver<'a> {
    pub fn new(store: &'a dyn IConceptStore, context: &'a dyn IUserContext) -> Self {
        Self { store, context }
    }

    /// Return the concept with `stable_uuid` if it exists, otherwise save a
    /// new one named `name`.
    ///
    /// An existing concept is returned as stored, without any change. A blank
    /// or absent `stable_uuid` always creates a new concept and lets the store
    /// assign its uuid. Created concepts are "Text"/"Drug", not retired, and
    /// attributed to the context user.
    pub fn resolve(
        &self,
        name: &str,
        stable_uuid: Option<&str>,
        is_set: bool,
    ) -> UpgradeResult<Concept> {
        let creator = self.context.authenticated_user().map(|u| u.user_id);
        let now = Utc::now();

        let mut uuid = String::new();
        if let Some(stable_uuid) = stable_uuid.filter(|u| !is_blank(u)) {
            if let Some(existing) = self.store.get_concept_by_uuid(stable_uuid)? {
                tracing::debug!(
                    uuid = stable_uuid,
                    concept_id = ?existing.concept_id,
                    "reusing existing concept"
                );
                return Ok(existing);
            }
            uuid = stable_uuid.to_string();
        }

        let datatype = self
            .store
            .get_concept_datatype_by_name(CONCEPT_DATATYPE_TEXT)?
            .ok_or_else(|| UpgradeError::MissingDatatype {
                name: CONCEPT_DATATYPE_TEXT.to_string(),
            })?;
        let concept_class = self
            .store
            .get_concept_class_by_name(CONCEPT_CLASS_DRUG)?
            .ok_or_else(|| UpgradeError::MissingConceptClass {
                name: CONCEPT_CLASS_DRUG.to_string(),
            })?;

        let mut concept_name = ConceptName::new(name, self.context.locale());
        concept_name.creator = creator;
        concept_name.date_created = now;

        let concept = Concept {
            concept_id: None,
            uuid,
            names: vec![concept_name],
            datatype,
            concept_class,
            is_set,
            retired: false,
            creator,
            date_created: now,
            set_members: Vec::new(),
        };

        let saved = self.store.save_concept(&concept)?;
        tracing::debug!(
            text = name,
            uuid = %saved.uuid,
            concept_id = ?saved.concept_id,
            is_set,
            "created concept"
        );
        Ok(saved)
    }
}
