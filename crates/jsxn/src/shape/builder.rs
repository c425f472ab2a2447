// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for ShapeDescriptor.

use crate::shape::{Behavior, BehaviorMap, FieldDescriptor, ShapeDescriptor};
use crate::{Error, Record, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for creating ShapeDescriptor instances.
///
/// Validation is deferred to [`ShapeBuilder::build`], which rejects repeated
/// field names and (unless [`ShapeBuilder::allow_empty`] was called) shapes
/// without fields.
#[derive(Clone)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
    behaviors: BehaviorMap,
    seed: Option<Map<String, Value>>,
    allow_empty: bool,
}

impl ShapeBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            behaviors: BehaviorMap::new(),
            seed: None,
            allow_empty: false,
        }
    }

    /// Add an untyped field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(name));
        self
    }

    /// Add a field with a declared type tag.
    pub fn typed_field(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.fields
            .push(FieldDescriptor::new(name).with_type(type_tag));
        self
    }

    /// Add a prepared field descriptor.
    pub fn field_descriptor(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add untyped fields in iteration order.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .extend(names.into_iter().map(FieldDescriptor::new));
        self
    }

    /// Attach a behavior.
    pub fn behavior<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.behaviors.insert(name.into(), Arc::new(body));
        self
    }

    /// Attach an already shared behavior.
    pub fn shared_behavior(mut self, name: impl Into<String>, body: Behavior) -> Self {
        self.behaviors.insert(name.into(), body);
        self
    }

    /// Remember the values the shape was derived from.
    pub fn seed(mut self, values: Map<String, Value>) -> Self {
        self.seed = Some(values);
        self
    }

    /// Permit a shape with zero fields.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Build the ShapeDescriptor.
    pub fn build(self) -> Result<ShapeDescriptor> {
        if self.fields.is_empty() && !self.allow_empty {
            return Err(Error::EmptyDefinition(self.name));
        }

        let mut index = HashMap::with_capacity(self.fields.len());
        for (position, field) in self.fields.iter().enumerate() {
            if index.insert(field.name.clone(), position).is_some() {
                return Err(Error::DuplicateField {
                    shape: self.name,
                    field: field.name.clone(),
                });
            }
        }

        Ok(ShapeDescriptor::from_parts(
            self.name,
            self.fields,
            index,
            self.behaviors,
            self.seed,
        ))
    }
}
