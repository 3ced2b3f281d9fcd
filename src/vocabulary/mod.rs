//! Ontology annotation vocabulary.
//!
//! Fields declare ontology semantics through five independent annotation
//! kinds: class membership, subclass parents, property label/domain/range, the
//! object-property marker, and an `rdfs:comment`. Identifiers live in
//! `identity`; the payload types live in `annotations`.

pub mod annotations;
pub mod identity;

pub use annotations::{
    ClassAnnotation, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
    SubClassOfAnnotation,
};
pub use identity::ClassId;
