//! Insert and load concepts with their names, metadata and set members.

use orderprep_core::errors::StorageError;
use orderprep_core::models::{Concept, ConceptName};
use rusqlite::{params, Connection, OptionalExtension};

use super::{concept_sets, metadata, parse_timestamp};
use crate::to_storage_err;

/// Columns of the concept row, before names and metadata are joined in.
struct ConceptRow {
    concept_id: i64,
    uuid: String,
    datatype_id: i64,
    class_id: i64,
    is_set: bool,
    retired: bool,
    creator: Option<i64>,
    date_created: String,
}

/// Insert a concept row and its names. Set members are not written.
/// A blank uuid is replaced with a fresh v4 uuid. Returns the new concept_id.
pub fn insert_concept(conn: &Connection, concept: &Concept) -> Result<i64, StorageError> {
    let uuid = if concept.uuid.trim().is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        concept.uuid.clone()
    };

    conn.execute(
        "INSERT INTO concept (uuid, datatype_id, class_id, is_set, retired, creator, date_created)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            uuid,
            concept.datatype.id,
            concept.concept_class.id,
            concept.is_set as i32,
            concept.retired as i32,
            concept.creator,
            concept.date_created.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert concept {uuid}: {e}")))?;
    let concept_id = conn.last_insert_rowid();

    for name in &concept.names {
        insert_name(conn, concept_id, name)?;
    }

    Ok(concept_id)
}

fn insert_name(conn: &Connection, concept_id: i64, name: &ConceptName) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO concept_name (concept_id, name, locale, creator, date_created)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            concept_id,
            name.name,
            name.locale,
            name.creator,
            name.date_created.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_concept(conn: &Connection, concept_id: i64) -> Result<Option<Concept>, StorageError> {
    let row = conn
        .query_row(
            "SELECT concept_id, uuid, datatype_id, class_id, is_set, retired, creator, date_created
             FROM concept WHERE concept_id = ?1",
            params![concept_id],
            map_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.map(|r| hydrate(conn, r)).transpose()
}

pub fn get_concept_by_uuid(conn: &Connection, uuid: &str) -> Result<Option<Concept>, StorageError> {
    let row = conn
        .query_row(
            "SELECT concept_id, uuid, datatype_id, class_id, is_set, retired, creator, date_created
             FROM concept WHERE uuid = ?1",
            params![uuid],
            map_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.map(|r| hydrate(conn, r)).transpose()
}

pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM concept", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<ConceptRow> {
    Ok(ConceptRow {
        concept_id: row.get(0)?,
        uuid: row.get(1)?,
        datatype_id: row.get(2)?,
        class_id: row.get(3)?,
        is_set: row.get::<_, i32>(4)? != 0,
        retired: row.get::<_, i32>(5)? != 0,
        creator: row.get(6)?,
        date_created: row.get(7)?,
    })
}

fn hydrate(conn: &Connection, row: ConceptRow) -> Result<Concept, StorageError> {
    let datatype =
        metadata::datatype_by_id(conn, row.datatype_id)?.ok_or_else(|| StorageError::NotFound {
            entity: "concept_datatype",
            id: row.datatype_id.to_string(),
        })?;
    let concept_class =
        metadata::class_by_id(conn, row.class_id)?.ok_or_else(|| StorageError::NotFound {
            entity: "concept_class",
            id: row.class_id.to_string(),
        })?;

    Ok(Concept {
        concept_id: Some(row.concept_id),
        uuid: row.uuid,
        names: names_of(conn, row.concept_id)?,
        datatype,
        concept_class,
        is_set: row.is_set,
        retired: row.retired,
        creator: row.creator,
        date_created: parse_timestamp(&row.date_created),
        set_members: concept_sets::members_of(conn, row.concept_id)?,
    })
}

fn names_of(conn: &Connection, concept_id: i64) -> Result<Vec<ConceptName>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT name, locale, creator, date_created
             FROM concept_name WHERE concept_id = ?1 ORDER BY concept_name_id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![concept_id], |row| {
            let date_created: String = row.get(3)?;
            Ok(ConceptName {
                name: row.get(0)?,
                locale: row.get(1)?,
                creator: row.get(2)?,
                date_created: parse_timestamp(&date_created),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
