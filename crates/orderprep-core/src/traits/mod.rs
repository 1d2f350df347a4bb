//! Collaborator boundaries consumed by the preparation pipeline.

pub mod concept_store;
pub mod drug_order_source;
pub mod settings_store;
pub mod user_context;

pub use concept_store::IConceptStore;
pub use drug_order_source::IDrugOrderSource;
pub use settings_store::ISettingsStore;
pub use user_context::{IUserContext, StaticUserContext};
