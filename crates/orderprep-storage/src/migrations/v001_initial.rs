//! V001: Initial schema.
//! users, concept metadata, concepts, names, set memberships, drug orders, settings.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE
) STRICT;

CREATE TABLE IF NOT EXISTS concept_datatype (
    concept_datatype_id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL UNIQUE
) STRICT;

CREATE TABLE IF NOT EXISTS concept_class (
    concept_class_id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL UNIQUE
) STRICT;

-- concept_id is the numeric code written to the mapping artifact.
CREATE TABLE IF NOT EXISTS concept (
    concept_id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL UNIQUE,
    datatype_id INTEGER NOT NULL REFERENCES concept_datatype(concept_datatype_id),
    class_id INTEGER NOT NULL REFERENCES concept_class(concept_class_id),
    is_set INTEGER NOT NULL DEFAULT 0,
    retired INTEGER NOT NULL DEFAULT 0,
    creator INTEGER,
    date_created TEXT NOT NULL
) STRICT;

CREATE TABLE IF NOT EXISTS concept_name (
    concept_name_id INTEGER PRIMARY KEY AUTOINCREMENT,
    concept_id INTEGER NOT NULL REFERENCES concept(concept_id),
    name TEXT NOT NULL,
    locale TEXT NOT NULL,
    creator INTEGER,
    date_created TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_concept_name_concept
    ON concept_name(concept_id);

-- No uniqueness on (concept_set, concept_id): a member may appear twice.
CREATE TABLE IF NOT EXISTS concept_set (
    concept_set_id INTEGER PRIMARY KEY AUTOINCREMENT,
    concept_id INTEGER NOT NULL REFERENCES concept(concept_id),
    concept_set INTEGER NOT NULL REFERENCES concept(concept_id),
    sort_weight REAL NOT NULL,
    creator INTEGER,
    date_created TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_concept_set_set
    ON concept_set(concept_set);

-- Legacy orders: units and frequency are free text.
CREATE TABLE IF NOT EXISTS drug_order (
    order_id INTEGER PRIMARY KEY,
    units TEXT,
    frequency TEXT
) STRICT;

CREATE TABLE IF NOT EXISTS global_property (
    property TEXT PRIMARY KEY,
    property_value TEXT
) STRICT;
"#;
