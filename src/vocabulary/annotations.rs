//! The five annotation kinds a model field may carry.
//!
//! Each kind is independent: a field can carry any subset, including none.
//! Constructors are `const fn` so the built-in model can declare its tables as
//! `static` items; field-table files deserialize into the same types.

use crate::vocabulary::identity::ClassId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Marks the field's value type as an ontology class.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassAnnotation {
    pub class: ClassId,
}

impl ClassAnnotation {
    pub const fn new(class: &'static str) -> Self {
        Self {
            class: ClassId::new(class),
        }
    }
}

/// Parent classes of the class declared on the same field.
///
/// Stored in declaration order, but the order carries no meaning; compare with
/// [`SubClassOfAnnotation::parents`] when order should not matter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubClassOfAnnotation {
    pub sub_class_of: Cow<'static, [ClassId]>,
}

impl SubClassOfAnnotation {
    pub const fn new(parents: &'static [ClassId]) -> Self {
        Self {
            sub_class_of: Cow::Borrowed(parents),
        }
    }

    pub fn parents(&self) -> BTreeSet<&ClassId> {
        self.sub_class_of.iter().collect()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.sub_class_of.iter().any(|parent| parent == class)
    }
}

/// Label, domain(s) and range of an ontology property.
///
/// `domain` and `domains` are kept exactly as declared. Use
/// [`PropertyAnnotation::effective_domains`] for the combined view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnnotation {
    pub label: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "ClassId::is_empty")]
    pub domain: ClassId,
    #[serde(default, skip_serializing_if = "no_domains")]
    pub domains: Cow<'static, [ClassId]>,
    pub range: ClassId,
}

impl PropertyAnnotation {
    /// Declare a property. Pass `""` for no single domain and `&[]` for no
    /// domain set.
    pub const fn new(
        label: &'static str,
        domain: &'static str,
        domains: &'static [ClassId],
        range: &'static str,
    ) -> Self {
        Self {
            label: Cow::Borrowed(label),
            domain: ClassId::new(domain),
            domains: Cow::Borrowed(domains),
            range: ClassId::new(range),
        }
    }

    /// Domain classes after combining `domain` and `domains`.
    ///
    /// A non-empty `domains` set wins outright; otherwise a non-empty `domain`
    /// is treated as a one-element set; otherwise the property has no domain.
    /// Duplicates in `domains` collapse.
    pub fn effective_domains(&self) -> BTreeSet<&ClassId> {
        if !self.domains.is_empty() {
            return self.domains.iter().collect();
        }
        if !self.domain.is_empty() {
            return BTreeSet::from([&self.domain]);
        }
        BTreeSet::new()
    }
}

fn no_domains(domains: &Cow<'static, [ClassId]>) -> bool {
    domains.is_empty()
}

/// Presence-only flag: the property on this field is an object property.
///
/// Serialized as `{}` so that a present marker never reads back as `null`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ObjectPropertyMarker {}

/// Human-readable `rdfs:comment` text. An empty comment is still a comment.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentAnnotation {
    pub comment: Cow<'static, str>,
}

impl CommentAnnotation {
    pub const fn new(comment: &'static str) -> Self {
        Self {
            comment: Cow::Borrowed(comment),
        }
    }
}
