//! File-backed persistence: data survives engine close + reopen.

use chrono::Utc;
use orderprep_core::models::{Concept, ConceptName};
use orderprep_core::traits::{IConceptStore, ISettingsStore};
use orderprep_core::UpgradeConfig;
use orderprep_storage::StorageEngine;

#[test]
fn concepts_and_settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orderprep.db");

    let concept_id = {
        let engine = StorageEngine::open(&path).unwrap();
        assert_eq!(engine.db().path(), Some(path.as_path()));
        let concept = Concept {
            concept_id: None,
            uuid: "persisted-uuid".to_string(),
            names: vec![ConceptName::new("DRUG ORDER FREQUENCIES", "en")],
            datatype: engine.get_concept_datatype_by_name("Text").unwrap().unwrap(),
            concept_class: engine.get_concept_class_by_name("Drug").unwrap().unwrap(),
            is_set: true,
            retired: false,
            creator: Some(1),
            date_created: Utc::now(),
            set_members: vec![],
        };
        let saved = engine.save_concept(&concept).unwrap();
        engine.set_setting("guard", "true").unwrap();
        saved.concept_id.unwrap()
    };

    let engine = StorageEngine::open(&path).unwrap();
    let reloaded = engine.get_concept_by_uuid("persisted-uuid").unwrap().unwrap();
    assert_eq!(reloaded.concept_id, Some(concept_id));
    assert_eq!(reloaded.name("en"), Some("DRUG ORDER FREQUENCIES"));
    assert_eq!(engine.get_setting("guard").unwrap().as_deref(), Some("true"));
}

#[test]
fn from_config_opens_the_configured_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = UpgradeConfig {
        application_data_dir: Some(dir.path().display().to_string()),
        ..UpgradeConfig::default()
    };

    {
        let engine = StorageEngine::from_config(&config).unwrap();
        assert_eq!(engine.db().path(), Some(config.effective_database_path().as_path()));
        engine.set_setting("order.drugDosingUnitsConceptUuid", "site-uuid").unwrap();
    }

    assert!(dir.path().join("orderprep.db").exists());
    let reopened = StorageEngine::from_config(&config).unwrap();
    assert_eq!(
        reopened
            .get_setting("order.drugDosingUnitsConceptUuid")
            .unwrap()
            .as_deref(),
        Some("site-uuid")
    );
}
