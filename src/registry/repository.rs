//! Holds the model classes a generator walks, keyed by class name.
//!
//! Static tables and field-table files both end up here. Loading a file checks
//! the table's structure (schema, version, unique names) and nothing about the
//! ontology it describes; that judgement belongs to the consumer.

use crate::registry::descriptor::{FieldDescriptor, ModelClass};
use crate::registry::table::{FIELD_TABLE_SCHEMA_VERSION, FieldTable, load_field_table_from_path};
use crate::schema_loader::{SchemaLoadResult, bundled_field_table_schema, load_json_schema};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default)]
/// In-memory set of model classes keyed by class name.
pub struct FieldRegistry {
    classes: BTreeMap<String, ModelClass>,
}

impl FieldRegistry {
    /// Load a field table validated against the bundled schema.
    pub fn load(path: &Path) -> Result<Self> {
        let schema = bundled_field_table_schema()?;
        Self::load_validated(path, &schema)
    }

    /// Load a field table validated against a schema file on disk.
    pub fn load_with_schema(path: &Path, schema_path: &Path) -> Result<Self> {
        let schema = load_json_schema(schema_path)
            .with_context(|| format!("loading field table schema {}", schema_path.display()))?;
        Self::load_validated(path, &schema)
    }

    fn load_validated(path: &Path, schema: &SchemaLoadResult) -> Result<Self> {
        validate_against_schema(path, schema)?;
        let table = load_field_table_from_path(path)?;
        let registry = Self::from_table(table)
            .with_context(|| format!("building field registry from {}", path.display()))?;
        debug!(
            path = %path.display(),
            schema_version = %schema.schema_version,
            classes = registry.classes.len(),
            "loaded field table"
        );
        Ok(registry)
    }

    /// Build a registry from a parsed table, rejecting structural problems.
    pub fn from_table(table: FieldTable) -> Result<Self> {
        if table.schema_version != FIELD_TABLE_SCHEMA_VERSION {
            bail!(
                "schema_version '{}' not supported, expected '{}'",
                table.schema_version,
                FIELD_TABLE_SCHEMA_VERSION
            );
        }

        let mut registry = Self::default();
        for class in table.classes {
            validate_class(&class)?;
            if registry.classes.contains_key(class.name()) {
                bail!("duplicate model class {}", class.name());
            }
            registry.classes.insert(class.name().to_string(), class);
        }
        Ok(registry)
    }

    /// Register a class, replacing any class already registered under its name.
    pub fn register(&mut self, class: ModelClass) {
        if let Some(previous) = self.classes.insert(class.name().to_string(), class) {
            warn!(class = previous.name(), "replaced model class in field registry");
        }
    }

    /// Fetch a class by name, if present.
    pub fn class(&self, name: &str) -> Option<&ModelClass> {
        self.classes.get(name)
    }

    /// Resolve a field inside a registered class.
    pub fn field(&self, class: &str, field: &str) -> Option<&FieldDescriptor> {
        self.class(class)?.field(field)
    }

    /// Iterates classes in name order.
    pub fn classes(&self) -> impl Iterator<Item = &ModelClass> {
        self.classes.values()
    }

    /// Iterates every (class, field) pair, classes in name order and fields in
    /// declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&ModelClass, &FieldDescriptor)> {
        self.classes
            .values()
            .flat_map(|class| class.fields().iter().map(move |field| (class, field)))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ModelClass> for FieldRegistry {
    fn from_iter<I: IntoIterator<Item = ModelClass>>(iter: I) -> Self {
        let mut registry = Self::default();
        for class in iter {
            registry.register(class);
        }
        registry
    }
}

fn validate_class(class: &ModelClass) -> Result<()> {
    if class.name().trim().is_empty() {
        bail!("encountered model class with no name");
    }
    let mut seen = BTreeSet::new();
    for field in class.fields() {
        if field.name().trim().is_empty() {
            bail!("model class {} has a field with no name", class.name());
        }
        if !seen.insert(field.name()) {
            bail!(
                "model class {} declares field {} more than once",
                class.name(),
                field.name()
            );
        }
    }
    Ok(())
}

fn validate_against_schema(table_path: &Path, schema: &SchemaLoadResult) -> Result<()> {
    let file = File::open(table_path)
        .with_context(|| format!("opening field table {}", table_path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing field table {}", table_path.display()))?;
    schema.validate(&value, table_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldAnnotations;
    use serde_json::json;
    use tempfile::NamedTempFile;

    static TEAM_FIELDS: [FieldDescriptor; 1] =
        [FieldDescriptor::new("team", FieldAnnotations::NONE)];
    static TEAM: ModelClass = ModelClass::new("Team", &TEAM_FIELDS);
    static GAME: ModelClass = ModelClass::new("Game", &[]);

    fn write_table(value: Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        serde_json::to_writer(&mut file, &value).expect("write table");
        file
    }

    #[test]
    fn classes_iterate_in_name_order() {
        let registry: FieldRegistry = [TEAM.clone(), GAME.clone()].into_iter().collect();
        let names: Vec<&str> = registry.classes().map(ModelClass::name).collect();
        assert_eq!(names, vec!["Game", "Team"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.field("Team", "team").is_some());
        assert!(registry.field("Team", "missing").is_none());
        assert!(registry.field("Missing", "team").is_none());
    }

    #[test]
    fn register_replaces_existing_class() {
        let mut registry = FieldRegistry::default();
        registry.register(TEAM.clone());
        registry.register(ModelClass {
            name: "Team".into(),
            fields: Vec::new().into(),
        });
        assert_eq!(registry.len(), 1);
        assert!(registry.class("Team").unwrap().fields().is_empty());
    }

    #[test]
    fn load_accepts_valid_table() {
        let file = write_table(json!({
            "schema_version": FIELD_TABLE_SCHEMA_VERSION,
            "classes": [{
                "name": "Game",
                "fields": [{
                    "name": "home_team",
                    "class": "Team",
                    "property": {"label": "home team", "domain": "Game", "range": "Team"},
                    "object_property": {}
                }]
            }]
        }));
        let registry = FieldRegistry::load(file.path()).expect("valid table loads");
        let field = registry.field("Game", "home_team").expect("field present");
        assert!(field.annotations.object_property.is_some());
        assert_eq!(registry.fields().count(), 1);
    }

    #[test]
    fn load_rejects_schema_violations() {
        let file = write_table(json!({
            "schema_version": FIELD_TABLE_SCHEMA_VERSION,
            "classes": [{
                "name": "Game",
                "fields": [{"name": "home_team", "colour": "red"}]
            }]
        }));
        let err = FieldRegistry::load(file.path()).expect_err("unknown key rejected");
        assert!(err.to_string().contains("failed schema validation"));
    }

    #[test]
    fn load_rejects_wrong_version() {
        let file = write_table(json!({"schema_version": "pbprdf_field_table_v0", "classes": []}));
        assert!(FieldRegistry::load(file.path()).is_err());
    }

    #[test]
    fn from_table_rejects_duplicate_names() {
        let duplicate_class = FieldTable::new(vec![TEAM.clone(), TEAM.clone()]);
        let err = FieldRegistry::from_table(duplicate_class).expect_err("duplicate class");
        assert!(err.to_string().contains("duplicate model class Team"));

        static TWICE: [FieldDescriptor; 2] = [
            FieldDescriptor::new("period", FieldAnnotations::NONE),
            FieldDescriptor::new("period", FieldAnnotations::NONE),
        ];
        let duplicate_field = FieldTable::new(vec![ModelClass::new("Event", &TWICE)]);
        let err = FieldRegistry::from_table(duplicate_field).expect_err("duplicate field");
        assert!(err.to_string().contains("declares field period more than once"));
    }

    #[test]
    fn blank_class_and_field_names_are_rejected() {
        let file = write_table(json!({
            "schema_version": FIELD_TABLE_SCHEMA_VERSION,
            "classes": [{"name": " ", "fields": []}]
        }));
        let err = FieldRegistry::load(file.path()).expect_err("blank class name");
        assert!(format!("{err:#}").contains("encountered model class with no name"));

        static BLANK: [FieldDescriptor; 1] = [FieldDescriptor::new(" ", FieldAnnotations::NONE)];
        let blank_field = FieldTable::new(vec![ModelClass::new("Event", &BLANK)]);
        let err = FieldRegistry::from_table(blank_field).expect_err("blank field name");
        assert!(err.to_string().contains("has a field with no name"));
    }

    #[test]
    fn load_with_schema_uses_file_on_disk() {
        let schema_path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("schema/field_table.schema.json");
        let file = write_table(json!({
            "schema_version": FIELD_TABLE_SCHEMA_VERSION,
            "classes": [{"name": "Team", "fields": [{"name": "team", "class": "Team"}]}]
        }));
        let registry =
            FieldRegistry::load_with_schema(file.path(), &schema_path).expect("loads with schema");
        assert!(registry.class("Team").is_some());
    }
}
