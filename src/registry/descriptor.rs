//! Per-field descriptors: the reflection-free stand-in for annotated fields.
//!
//! A `ModelClass` maps each field identifier to a `FieldDescriptor`, and every
//! descriptor holds one optional slot per annotation kind, so a field can never
//! carry two annotations of the same kind.

use crate::vocabulary::{
    ClassAnnotation, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
    SubClassOfAnnotation,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// The annotations declared on one field; `None` means the kind is absent.
pub struct FieldAnnotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_class_of: Option<SubClassOfAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_property: Option<ObjectPropertyMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentAnnotation>,
}

impl FieldAnnotations {
    /// A field with no annotations at all.
    pub const NONE: FieldAnnotations = FieldAnnotations {
        class: None,
        sub_class_of: None,
        property: None,
        object_property: None,
        comment: None,
    };

    pub fn is_empty(&self) -> bool {
        self.class.is_none()
            && self.sub_class_of.is_none()
            && self.property.is_none()
            && self.object_property.is_none()
            && self.comment.is_none()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A named field of a model class together with its annotations.
pub struct FieldDescriptor {
    pub name: Cow<'static, str>,
    #[serde(flatten)]
    pub annotations: FieldAnnotations,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, annotations: FieldAnnotations) -> Self {
        Self {
            name: Cow::Borrowed(name),
            annotations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A model class and its field descriptor table, in declaration order.
pub struct ModelClass {
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub fields: Cow<'static, [FieldDescriptor]>,
}

impl ModelClass {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            fields: Cow::Borrowed(fields),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Resolve a field by identifier.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}
