//! Queries for concept_datatype and concept_class.

use orderprep_core::errors::StorageError;
use orderprep_core::models::{ConceptClass, ConceptDatatype};
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

pub fn datatype_by_name(conn: &Connection, name: &str) -> Result<Option<ConceptDatatype>, StorageError> {
    conn.query_row(
        "SELECT concept_datatype_id, uuid, name FROM concept_datatype WHERE name = ?1",
        params![name],
        |row| {
            Ok(ConceptDatatype {
                id: row.get(0)?,
                uuid: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn datatype_by_id(conn: &Connection, id: i64) -> Result<Option<ConceptDatatype>, StorageError> {
    conn.query_row(
        "SELECT concept_datatype_id, uuid, name FROM concept_datatype WHERE concept_datatype_id = ?1",
        params![id],
        |row| {
            Ok(ConceptDatatype {
                id: row.get(0)?,
                uuid: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn class_by_name(conn: &Connection, name: &str) -> Result<Option<ConceptClass>, StorageError> {
    conn.query_row(
        "SELECT concept_class_id, uuid, name FROM concept_class WHERE name = ?1",
        params![name],
        |row| {
            Ok(ConceptClass {
                id: row.get(0)?,
                uuid: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn class_by_id(conn: &Connection, id: i64) -> Result<Option<ConceptClass>, StorageError> {
    conn.query_row(
        "SELECT concept_class_id, uuid, name FROM concept_class WHERE concept_class_id = ?1",
        params![id],
        |row| {
            Ok(ConceptClass {
                id: row.get(0)?,
                uuid: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Remove a datatype by name. Only succeeds while no concept references it.
pub fn delete_datatype(conn: &Connection, name: &str) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM concept_datatype WHERE name = ?1", params![name])
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Remove a class by name. Only succeeds while no concept references it.
pub fn delete_class(conn: &Connection, name: &str) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM concept_class WHERE name = ?1", params![name])
        .map_err(|e| to_storage_err(e.to_string()))
}
