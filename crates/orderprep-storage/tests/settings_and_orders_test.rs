//! Tests for global properties and the drug order source.

use orderprep_core::models::DrugOrder;
use orderprep_core::traits::{IDrugOrderSource, ISettingsStore};
use orderprep_storage::queries::{drug_orders, global_properties};
use orderprep_storage::StorageEngine;

#[test]
fn missing_setting_reads_as_none() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.get_setting("order.drugDosingUnitsConceptUuid").unwrap().is_none());
}

#[test]
fn set_setting_upserts() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.set_setting("guard", "false").unwrap();
    assert_eq!(engine.get_setting("guard").unwrap().as_deref(), Some("false"));

    engine.set_setting("guard", "true").unwrap();
    assert_eq!(engine.get_setting("guard").unwrap().as_deref(), Some("true"));

    let rows: i64 = engine
        .db()
        .with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM global_property", [], |row| row.get(0))
                .map_err(|e| orderprep_core::StorageError::SqliteError { message: e.to_string() })
        })
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn null_property_value_reads_as_none() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .db()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO global_property (property, property_value) VALUES ('k', NULL)",
                [],
            )
            .map_err(|e| orderprep_core::StorageError::SqliteError { message: e.to_string() })
        })
        .unwrap();
    assert!(engine.get_setting("k").unwrap().is_none());
}

#[test]
fn delete_setting() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.set_setting("k", "v").unwrap();
    let removed = engine
        .db()
        .with_conn(|conn| global_properties::delete(conn, "k"))
        .unwrap();
    assert_eq!(removed, 1);
    assert!(engine.get_setting("k").unwrap().is_none());
}

#[test]
fn drug_orders_are_returned_in_id_order_with_blanks_kept() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .insert_drug_orders(&[
            DrugOrder::new(3, Some("ml"), None),
            DrugOrder::new(1, Some("mg"), Some("Once daily")),
            DrugOrder::new(2, Some(""), Some("Twice daily")),
        ])
        .unwrap();

    let orders: Vec<DrugOrder> = engine
        .get_drug_orders()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].order_id, 1);
    assert_eq!(orders[1].units.as_deref(), Some(""));
    assert_eq!(orders[2].frequency, None);

    let count = engine.db().with_conn(drug_orders::count).unwrap();
    assert_eq!(count, 3);
}

#[test]
fn duplicate_order_id_rolls_back_batch() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result = engine.insert_drug_orders(&[
        DrugOrder::new(1, Some("mg"), None),
        DrugOrder::new(1, Some("ml"), None),
    ]);
    assert!(result.is_err());
    assert!(engine.get_drug_orders().unwrap().is_empty());
}
