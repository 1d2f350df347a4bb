use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Semantic datatype tag of a concept ("Text", "Numeric", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDatatype {
    pub id: i64,
    pub uuid: String,
    pub name: String,
}

/// Semantic class tag of a concept ("Drug", "Diagnosis", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptClass {
    pub id: i64,
    pub uuid: String,
    pub name: String,
}

/// A locale-tagged display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptName {
    pub name: String,
    pub locale: String,
    pub creator: Option<i64>,
    pub date_created: DateTime<Utc>,
}

impl ConceptName {
    pub fn new(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: locale.into(),
            creator: None,
            date_created: Utc::now(),
        }
    }
}

/// Membership of a concept in a set.
///
/// `id` is `None` until the store persists the membership. The set side is
/// implied by the owning [`Concept`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptSetMember {
    pub id: Option<i64>,
    pub member_id: i64,
    pub sort_weight: f64,
    pub creator: Option<i64>,
    pub date_created: DateTime<Utc>,
}

impl ConceptSetMember {
    pub fn new(member_id: i64, sort_weight: f64) -> Self {
        Self {
            id: None,
            member_id,
            sort_weight,
            creator: None,
            date_created: Utc::now(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A coded dictionary entry.
///
/// `concept_id` is the numeric code written to the mapping artifact. It is
/// `None` until the concept has been saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub concept_id: Option<i64>,
    /// Stable identifier. Empty means "let the store assign one".
    pub uuid: String,
    pub names: Vec<ConceptName>,
    pub datatype: ConceptDatatype,
    pub concept_class: ConceptClass,
    pub is_set: bool,
    pub retired: bool,
    pub creator: Option<i64>,
    pub date_created: DateTime<Utc>,
    pub set_members: Vec<ConceptSetMember>,
}

impl Concept {
    /// Name in `locale`, or the first name if none matches.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.locale == locale)
            .or_else(|| self.names.first())
            .map(|n| n.name.as_str())
    }

    /// Ids of all member concepts, in insertion order. Repeats are kept.
    pub fn member_ids(&self) -> Vec<i64> {
        self.set_members.iter().map(|m| m.member_id).collect()
    }
}
