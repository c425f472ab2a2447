// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape descriptors: the canonical, immutable description of a record shape.

use crate::{Record, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Callable bound to a record of the shape that declares it.
///
/// The record is passed as the first argument and can only be reached
/// through its public (strict) accessors.
pub type Behavior = Arc<dyn Fn(&mut Record, &[Value]) -> Result<Value> + Send + Sync>;

/// Behaviors keyed by name.
pub type BehaviorMap = BTreeMap<String, Behavior>;

/// Field descriptor for shape members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type tag (informational, never enforced).
    pub type_tag: Option<String>,
}

impl FieldDescriptor {
    /// Create an untyped field descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: None,
        }
    }

    /// Attach a declared type tag.
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }
}

/// A complete shape descriptor.
///
/// Built by [`ShapeBuilder`](crate::ShapeBuilder) or the
/// [`normalize`](crate::normalize) entry point; never mutated afterwards.
/// Records hold it behind an [`Arc`].
#[derive(Clone)]
pub struct ShapeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
    behaviors: BehaviorMap,
    seed: Option<Map<String, Value>>,
}

impl ShapeDescriptor {
    /// Assemble a descriptor from already-validated parts.
    pub(crate) fn from_parts(
        name: String,
        fields: Vec<FieldDescriptor>,
        index: HashMap<String, usize>,
        behaviors: BehaviorMap,
        seed: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            name,
            fields,
            index,
            behaviors,
            seed,
        }
    }

    /// Shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for the degenerate empty shape.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check field membership.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_index(name).map(|i| &self.fields[i])
    }

    /// Get field position by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Declared type tag of a field, if any.
    pub fn type_tag(&self, name: &str) -> Option<&str> {
        self.field(name)?.type_tag.as_deref()
    }

    /// Field → type tag mapping, or `None` when no field declares a type.
    pub fn field_types(&self) -> Option<Vec<(&str, Option<&str>)>> {
        if self.fields.iter().all(|f| f.type_tag.is_none()) {
            return None;
        }
        Some(
            self.fields
                .iter()
                .map(|f| (f.name.as_str(), f.type_tag.as_deref()))
                .collect(),
        )
    }

    /// Look up a behavior by name.
    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.get(name)
    }

    /// Names of the declared behaviors (sorted).
    pub fn behavior_names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.keys().map(String::as_str)
    }

    /// Values of the document the shape was derived from (mapping forms only).
    pub fn seed(&self) -> Option<&Map<String, Value>> {
        self.seed.as_ref()
    }
}

impl fmt::Debug for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("behaviors", &self.behaviors.keys().collect::<Vec<_>>())
            .field("seed", &self.seed)
            .finish()
    }
}

// Behaviors are opaque closures; two shapes match when they expose the same
// behavior names.
impl PartialEq for ShapeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.fields == other.fields
            && self.seed == other.seed
            && self.behaviors.keys().eq(other.behaviors.keys())
    }
}
