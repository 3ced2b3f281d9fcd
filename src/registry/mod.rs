//! Field descriptor tables.
//!
//! Replaces runtime annotation lookup with explicit per-class tables: each
//! `ModelClass` maps field identifiers to `FieldDescriptor`s carrying optional
//! annotation payloads. Tables are either declared as `static` items (see
//! `crate::model`) or loaded from JSON field-table files; `FieldRegistry`
//! collects them for the generator to walk.

pub mod descriptor;
pub mod repository;
pub mod table;

pub use descriptor::{FieldAnnotations, FieldDescriptor, ModelClass};
pub use repository::FieldRegistry;
pub use table::{FIELD_TABLE_SCHEMA_VERSION, FieldTable, load_field_table_from_path};
