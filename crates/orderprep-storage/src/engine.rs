//! StorageEngine: owns the DatabaseManager, implements the concept store,
//! settings store and drug order source.

use std::path::Path;

use orderprep_core::config::UpgradeConfig;
use orderprep_core::errors::StorageError;
use orderprep_core::models::{Concept, ConceptClass, ConceptDatatype, DrugOrder};
use orderprep_core::traits::{IConceptStore, IDrugOrderSource, ISettingsStore};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::{concept_sets, concepts, drug_orders, global_properties, metadata};

/// SQLite-backed implementation of every storage collaborator.
pub struct StorageEngine {
    db: DatabaseManager,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    /// Open the database named by the configuration.
    pub fn from_config(config: &UpgradeConfig) -> Result<Self, StorageError> {
        let path = config.effective_database_path();
        tracing::debug!(path = %path.display(), "opening storage engine");
        Self::open(&path)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Direct database access (seeding, inspection).
    pub fn db(&self) -> &DatabaseManager {
        &self.db
    }

    /// Load legacy drug orders.
    pub fn insert_drug_orders(&self, orders: &[DrugOrder]) -> Result<(), StorageError> {
        self.db.with_conn(|conn| {
            with_immediate_transaction(conn, |tx| drug_orders::insert_batch(tx, orders))
        })
    }

    pub fn concept_count(&self) -> Result<i64, StorageError> {
        self.db.with_conn(concepts::count)
    }
}

impl IConceptStore for StorageEngine {
    fn get_concept(&self, concept_id: i64) -> Result<Option<Concept>, StorageError> {
        self.db.with_conn(|conn| concepts::get_concept(conn, concept_id))
    }

    fn get_concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, StorageError> {
        self.db.with_conn(|conn| concepts::get_concept_by_uuid(conn, uuid))
    }

    fn get_concept_datatype_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ConceptDatatype>, StorageError> {
        self.db.with_conn(|conn| metadata::datatype_by_name(conn, name))
    }

    fn get_concept_class_by_name(&self, name: &str) -> Result<Option<ConceptClass>, StorageError> {
        self.db.with_conn(|conn| metadata::class_by_name(conn, name))
    }

    fn save_concept(&self, concept: &Concept) -> Result<Concept, StorageError> {
        self.db.with_conn(|conn| {
            let concept_id = with_immediate_transaction(conn, |tx| {
                let concept_id = match concept.concept_id {
                    Some(id) => id,
                    None => concepts::insert_concept(tx, concept)?,
                };
                for member in concept.set_members.iter().filter(|m| !m.is_persisted()) {
                    concept_sets::insert_member(tx, concept_id, member)?;
                }
                Ok(concept_id)
            })?;

            tracing::debug!(concept_id, uuid = %concept.uuid, "saved concept");

            concepts::get_concept(conn, concept_id)?.ok_or_else(|| StorageError::NotFound {
                entity: "concept",
                id: concept_id.to_string(),
            })
        })
    }
}

impl ISettingsStore for StorageEngine {
    fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.db.with_conn(|conn| global_properties::get(conn, key))
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.with_conn(|conn| global_properties::set(conn, key, value))
    }
}

impl IDrugOrderSource for StorageEngine {
    fn get_drug_orders(&self) -> Result<Vec<Option<DrugOrder>>, StorageError> {
        let orders = self.db.with_conn(drug_orders::query_all)?;
        Ok(orders.into_iter().map(Some).collect())
    }
}
