//! V002: Seed rows the preparation depends on.
//! Default user, the "Text" datatype and the "Drug" class.

pub const MIGRATION_SQL: &str = r#"
INSERT OR IGNORE INTO users (user_id, username) VALUES (1, 'admin');

INSERT OR IGNORE INTO concept_datatype (uuid, name)
    VALUES ('8d4a4ab4-c2cc-11de-8d13-0010c6dffd0f', 'Text');

INSERT OR IGNORE INTO concept_class (uuid, name)
    VALUES ('8d490dfc-c2cc-11de-8d13-0010c6dffd0f', 'Drug');
"#;
