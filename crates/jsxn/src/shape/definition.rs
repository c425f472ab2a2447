// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural definitions and the reader that extracts their fields.
//!
//! A [`Definition`] is the data form of an annotated struct: a name, ordered
//! (optionally typed) fields, and named behaviors. It is written by hand with
//! the builder methods, or generated by `#[derive(Definable)]`.

use crate::shape::{BehaviorMap, FieldDescriptor};
use crate::{Record, Result};
use serde_json::Value;
use std::sync::Arc;

/// Types that can describe their own shape.
///
/// Usually derived:
///
/// ```
/// use jsxn::{Definable, Record, Value};
///
/// #[derive(Definable)]
/// #[jsxn(behavior(hello))]
/// struct Sleep {
///     one: String,
///     two: i64,
/// }
///
/// impl Sleep {
///     fn hello(record: &mut Record, _args: &[Value]) -> jsxn::Result<Value> {
///         Ok(Value::String(record.to_json()))
///     }
/// }
///
/// let def = <Sleep as jsxn::Definable>::definition();
/// assert_eq!(def.name(), "Sleep");
/// assert_eq!(def.read_fields().names, ["one", "two"]);
/// ```
pub trait Definable {
    /// Structural definition of the implementing type.
    fn definition() -> Definition;
}

/// What the reader extracts from a [`Definition`].
#[derive(Clone, Default)]
pub struct DefinitionFields {
    /// Field names in declaration order.
    pub names: Vec<String>,
    /// Type tags parallel to `names`; `None` when no field declares one.
    pub type_tags: Option<Vec<Option<String>>>,
    /// Declared behaviors.
    pub behaviors: BehaviorMap,
}

/// A named structural definition.
#[derive(Clone, Default)]
pub struct Definition {
    name: String,
    fields: Vec<FieldDescriptor>,
    behaviors: BehaviorMap,
    allow_empty: bool,
}

impl Definition {
    /// Start a definition with the given (unnormalized) name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare an untyped field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(name));
        self
    }

    /// Declare a typed field.
    pub fn typed_field(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.fields
            .push(FieldDescriptor::new(name).with_type(type_tag));
        self
    }

    /// Declare a behavior.
    pub fn behavior<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.behaviors.insert(name.into(), Arc::new(body));
        self
    }

    /// Accept this definition even if it declares no fields.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// The definition's own name, as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the caller opted into an empty shape.
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Read declared field names, optional type tags and behaviors.
    pub fn read_fields(&self) -> DefinitionFields {
        let names = self.fields.iter().map(|f| f.name.clone()).collect();
        let type_tags = self
            .fields
            .iter()
            .any(|f| f.type_tag.is_some())
            .then(|| self.fields.iter().map(|f| f.type_tag.clone()).collect());

        DefinitionFields {
            names,
            type_tags,
            behaviors: self.behaviors.clone(),
        }
    }
}
