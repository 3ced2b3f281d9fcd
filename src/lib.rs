//! Ontology annotations for the pbprdf play-by-play model.
//!
//! Model fields declare their ontology semantics (class, subclass parents,
//! property label/domain/range, object-property marker, comment) in static
//! descriptor tables. The `helper` queries are the contract an RDF/OWL schema
//! generator reads: one lookup per annotation kind, with absence reported as
//! `None` rather than an error. Nothing here validates, serializes or walks
//! the ontology; those decisions belong to the generator.

pub mod config;
pub mod helper;
pub mod logging;
pub mod model;
pub mod registry;
pub mod vocabulary;

mod schema_loader;

pub use config::{InspectConfig, split_list};
pub use helper::{
    FieldMetadata, class_of, comment_of, describe, is_object_property, property_of, sub_class_of,
};
pub use model::builtin_registry;
pub use registry::{
    FIELD_TABLE_SCHEMA_VERSION, FieldAnnotations, FieldDescriptor, FieldRegistry, FieldTable,
    ModelClass, load_field_table_from_path,
};
pub use vocabulary::{
    ClassAnnotation, ClassId, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
    SubClassOfAnnotation,
};
