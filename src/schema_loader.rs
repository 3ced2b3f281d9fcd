//! JSON Schema loading for field-table files.
//!
//! The schema ships inside the crate (`schema/field_table.schema.json`) so the
//! CLI works from any directory; callers may also point at a schema on disk.
//! Either way the schema's `schema_version` const must match the version this
//! crate understands before it is compiled.

use crate::registry::FIELD_TABLE_SCHEMA_VERSION;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUNDLED_FIELD_TABLE_SCHEMA: &str = include_str!("../schema/field_table.schema.json");
const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// A compiled field-table schema plus the version it pins.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

impl SchemaLoadResult {
    /// Validate `instance`, joining every violation into one error.
    pub fn validate(&self, instance: &Value, origin: &Path) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "field table {} failed schema validation:\n{}",
                origin.display(),
                details
            );
        }
        Ok(())
    }
}

pub(crate) fn bundled_field_table_schema() -> Result<SchemaLoadResult> {
    let value: Value = serde_json::from_str(BUNDLED_FIELD_TABLE_SCHEMA)
        .context("parsing bundled field table schema")?;
    compile_schema(value, "bundled field table schema")
}

pub(crate) fn load_json_schema(path: &Path) -> Result<SchemaLoadResult> {
    let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing schema {}", path.display()))?;
    compile_schema(value, &format!("schema {}", path.display()))
}

fn compile_schema(schema: Value, origin: &str) -> Result<SchemaLoadResult> {
    let schema_version = schema
        .pointer(SCHEMA_VERSION_POINTER)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("{origin} is missing a schema_version const"))?
        .to_string();
    if schema_version != FIELD_TABLE_SCHEMA_VERSION {
        bail!(
            "{origin} pins schema_version '{}', expected '{}'",
            schema_version,
            FIELD_TABLE_SCHEMA_VERSION
        );
    }

    // ValidationError borrows the schema, so render it before returning.
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling {origin}: {err}"))?;
    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}
