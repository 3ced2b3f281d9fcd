//! Deserializable representation of a field-table file.
//!
//! A field table declares model classes and their annotated fields in JSON, as
//! an alternative to the static tables in `crate::model`. The parsed types are
//! the same descriptors the static tables use, so lookups cannot tell the two
//! apart. Use `FieldRegistry::load` for the validated path.

use crate::registry::descriptor::ModelClass;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version tag every field-table file must carry.
pub const FIELD_TABLE_SCHEMA_VERSION: &str = "pbprdf_field_table_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full field table as stored on disk.
pub struct FieldTable {
    pub schema_version: String,
    pub classes: Vec<ModelClass>,
}

impl FieldTable {
    /// Wrap classes in a table tagged with the current schema version.
    pub fn new(classes: Vec<ModelClass>) -> Self {
        Self {
            schema_version: FIELD_TABLE_SCHEMA_VERSION.to_string(),
            classes,
        }
    }
}

/// Read and parse a field table from disk without additional validation.
///
/// Unknown keys are ignored and `null` reads as an absent annotation, so a
/// misspelled `"coment"` or `"object_property": null` loads as if the
/// annotation were missing. Only `FieldRegistry::load` rejects those tables.
pub fn load_field_table_from_path(path: &Path) -> Result<FieldTable> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let table: FieldTable =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_classes_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(
            &mut file,
            &json!({
                "schema_version": FIELD_TABLE_SCHEMA_VERSION,
                "classes": [
                    {"name": "Team", "fields": [{"name": "team", "class": "Team"}]},
                    {"name": "Game", "fields": []}
                ]
            }),
        )
        .unwrap();

        let table = load_field_table_from_path(file.path()).expect("table loads");
        assert_eq!(table.schema_version, FIELD_TABLE_SCHEMA_VERSION);
        let names: Vec<&str> = table.classes.iter().map(ModelClass::name).collect();
        assert_eq!(names, vec!["Team", "Game"]);
        assert!(table.classes[0].field("team").is_some());
    }

    #[test]
    fn load_reports_path_on_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{not json").unwrap();
        let err = load_field_table_from_path(file.path()).expect_err("invalid json");
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
    }

    #[test]
    fn unvalidated_load_drops_misspelled_annotations() {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(
            &mut file,
            &json!({
                "schema_version": FIELD_TABLE_SCHEMA_VERSION,
                "classes": [{
                    "name": "Game",
                    "fields": [{"name": "home_team", "coment": "typo", "object_property": null}]
                }]
            }),
        )
        .unwrap();

        let table = load_field_table_from_path(file.path()).unwrap();
        let field = &table.classes[0].fields()[0];
        assert!(field.annotations.comment.is_none());
        assert!(field.annotations.object_property.is_none());

        assert!(crate::registry::FieldRegistry::load(file.path()).is_err());
    }
}
