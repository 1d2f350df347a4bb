pub mod concept;
pub mod drug_order;
pub mod user;

pub use concept::{Concept, ConceptClass, ConceptDatatype, ConceptName, ConceptSetMember};
pub use drug_order::DrugOrder;
pub use user::User;
