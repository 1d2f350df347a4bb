//! Queries for the concept_set table: set memberships.

use orderprep_core::errors::StorageError;
use orderprep_core::models::ConceptSetMember;
use rusqlite::{params, Connection};

use super::parse_timestamp;
use crate::to_storage_err;

/// Insert a membership of `member.member_id` in `set_id`. Returns the row id.
/// No duplicate check: the same member can be inserted repeatedly.
pub fn insert_member(
    conn: &Connection,
    set_id: i64,
    member: &ConceptSetMember,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO concept_set (concept_id, concept_set, sort_weight, creator, date_created)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            member.member_id,
            set_id,
            member.sort_weight,
            member.creator,
            member.date_created.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Memberships of a set in insertion order.
pub fn members_of(conn: &Connection, set_id: i64) -> Result<Vec<ConceptSetMember>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT concept_set_id, concept_id, sort_weight, creator, date_created
             FROM concept_set WHERE concept_set = ?1 ORDER BY concept_set_id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![set_id], |row| {
            let date_created: String = row.get(4)?;
            Ok(ConceptSetMember {
                id: Some(row.get(0)?),
                member_id: row.get(1)?,
                sort_weight: row.get(2)?,
                creator: row.get(3)?,
                date_created: parse_timestamp(&date_created),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
