//! Query modules: plain functions over a `&Connection`.

pub mod concept_sets;
pub mod concepts;
pub mod drug_orders;
pub mod global_properties;
pub mod metadata;

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 column value, falling back to the epoch on malformed input.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}
