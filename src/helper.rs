//! Metadata extraction helper: one query per annotation kind.
//!
//! Every query is a lookup on the field's descriptor. None of them can fail;
//! an absent annotation comes back as `None` (or `false` for the marker), never
//! as a default payload. The descriptors are immutable, so repeated or
//! concurrent calls on the same field always agree.

use crate::registry::FieldDescriptor;
use crate::vocabulary::{ClassAnnotation, ClassId, PropertyAnnotation, SubClassOfAnnotation};
use serde::Serialize;
use std::collections::BTreeSet;

/// The ontology class declared for the field's value type, if any.
pub fn class_of(field: &FieldDescriptor) -> Option<&ClassAnnotation> {
    field.annotations.class.as_ref()
}

/// The subclass axiom declared on the field, if any.
pub fn sub_class_of(field: &FieldDescriptor) -> Option<&SubClassOfAnnotation> {
    field.annotations.sub_class_of.as_ref()
}

/// The property declaration on the field, if any. `domain` and `domains` are
/// returned exactly as declared.
pub fn property_of(field: &FieldDescriptor) -> Option<&PropertyAnnotation> {
    field.annotations.property.as_ref()
}

/// True iff the field carries the object-property marker.
pub fn is_object_property(field: &FieldDescriptor) -> bool {
    field.annotations.object_property.is_some()
}

/// The field's `rdfs:comment` text. `Some("")` is an explicit empty comment.
pub fn comment_of(field: &FieldDescriptor) -> Option<&str> {
    field
        .annotations
        .comment
        .as_ref()
        .map(|comment| &*comment.comment)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Results of all five queries for one field.
///
/// This is what a generator gathers per field before deciding which
/// declarations to emit. `effective_domains` applies the domain combination
/// rule from [`PropertyAnnotation::effective_domains`].
pub struct FieldMetadata<'a> {
    pub field: &'a str,
    pub class: Option<&'a ClassId>,
    pub sub_class_of: Option<BTreeSet<&'a ClassId>>,
    pub property: Option<&'a PropertyAnnotation>,
    pub effective_domains: Option<BTreeSet<&'a ClassId>>,
    pub object_property: bool,
    pub comment: Option<&'a str>,
}

/// Run every query against `field`.
pub fn describe(field: &FieldDescriptor) -> FieldMetadata<'_> {
    let property = property_of(field);
    FieldMetadata {
        field: field.name(),
        class: class_of(field).map(|annotation| &annotation.class),
        sub_class_of: sub_class_of(field).map(SubClassOfAnnotation::parents),
        property,
        effective_domains: property.map(PropertyAnnotation::effective_domains),
        object_property: is_object_property(field),
        comment: comment_of(field),
    }
}
