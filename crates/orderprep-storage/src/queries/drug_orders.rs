//! Queries for the drug_order table.

use orderprep_core::errors::StorageError;
use orderprep_core::models::DrugOrder;
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// Insert a batch of drug orders.
pub fn insert_batch(conn: &Connection, orders: &[DrugOrder]) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO drug_order (order_id, units, frequency) VALUES (?1, ?2, ?3)")
        .map_err(|e| to_storage_err(e.to_string()))?;

    for order in orders {
        stmt.execute(params![order.order_id, order.units, order.frequency])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// All drug orders in id order.
pub fn query_all(conn: &Connection) -> Result<Vec<DrugOrder>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT order_id, units, frequency FROM drug_order ORDER BY order_id ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(DrugOrder {
                order_id: row.get(0)?,
                units: row.get(1)?,
                frequency: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM drug_order", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
