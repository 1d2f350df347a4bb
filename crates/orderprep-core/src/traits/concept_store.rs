use crate::errors::StorageError;
use crate::models::{Concept, ConceptClass, ConceptDatatype};

/// Dictionary store: concepts, their names and set memberships.
pub trait IConceptStore: Send + Sync {
    fn get_concept(&self, concept_id: i64) -> Result<Option<Concept>, StorageError>;
    fn get_concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, StorageError>;

    fn get_concept_datatype_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ConceptDatatype>, StorageError>;
    fn get_concept_class_by_name(&self, name: &str) -> Result<Option<ConceptClass>, StorageError>;

    /// Persist a concept and return it as stored.
    ///
    /// A concept without `concept_id` is inserted (a blank uuid is replaced
    /// by a generated one). For an existing concept, set members without an
    /// id are inserted; persisted members are left alone.
    fn save_concept(&self, concept: &Concept) -> Result<Concept, StorageError>;
}
