/// Stable uuid of the "DOSING UNITS" set when no override is configured.
pub const DEFAULT_DOSING_UNITS_SET_UUID: &str = "87560c3e-8fdd-44c3-9bf8-3be9c6d7c241";

/// Stable uuid of the "DRUG ORDER FREQUENCIES" set.
pub const FREQUENCIES_SET_UUID: &str = "f73e5638-859d-4fcb-80da-82a68c90d4b5";

pub const DOSING_UNITS_SET_NAME: &str = "DOSING UNITS";
pub const FREQUENCIES_SET_NAME: &str = "DRUG ORDER FREQUENCIES";

/// Setting holding the uuid of the dosing units set.
pub const DOSING_UNITS_PROPERTY: &str = "order.drugDosingUnitsConceptUuid";

/// Run guard setting. Holds `"true"` once the preparation has completed.
pub const EXECUTED_PROPERTY: &str = "mohbeforeoneelevenupgrade.executed";

/// File name of the mapping artifact inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "order_entry_upgrade_settings.txt";

/// SQLite file of the bundled backend when no database path is configured.
pub const DEFAULT_DATABASE_FILE_NAME: &str = "orderprep.db";

/// Datatype assigned to every created concept.
pub const CONCEPT_DATATYPE_TEXT: &str = "Text";

/// Class assigned to every created concept.
pub const CONCEPT_CLASS_DRUG: &str = "Drug";

/// Placeholder sort weight for set members. No ordering is derived from input.
pub const DEFAULT_SORT_WEIGHT: f64 = 0.0;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_CREATOR_USER_ID: i64 = 1;
pub const DEFAULT_CREATOR_USERNAME: &str = "admin";

/// Directory under `$HOME` used when no application data directory is configured.
pub const DEFAULT_APPLICATION_DATA_DIR_NAME: &str = ".OpenMRS";
