//! Queries for the global_property table: string-valued settings.

use orderprep_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

/// Value for `property`. A row with a NULL value reads as `None`.
pub fn get(conn: &Connection, property: &str) -> Result<Option<String>, StorageError> {
    let value: Option<Option<String>> = conn
        .query_row(
            "SELECT property_value FROM global_property WHERE property = ?1",
            params![property],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(value.flatten())
}

/// Insert or replace the value for `property`.
pub fn set(conn: &Connection, property: &str, value: &str) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO global_property (property, property_value) VALUES (?1, ?2)
         ON CONFLICT(property) DO UPDATE SET property_value = excluded.property_value",
        params![property, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn delete(conn: &Connection, property: &str) -> Result<usize, StorageError> {
    conn.execute(
        "DELETE FROM global_property WHERE property = ?1",
        params![property],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
