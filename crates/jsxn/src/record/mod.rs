// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record container for strict, shape-checked field access.

mod factory;
mod input;

pub use factory::RecordFactory;
pub use input::RecordInput;

use crate::codec;
use crate::shape::ShapeDescriptor;
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

/// Read-only stand-in for unset slots.
static UNSET: Value = Value::Null;

/// A record of a fixed shape.
///
/// One slot per shape field, addressed through the shape's name → position
/// index. `None` marks an unset field; it is distinct from a present
/// `null` and serializes as `null`. Slots can never be added or removed.
#[derive(Clone)]
pub struct Record {
    /// Shape the record was built from.
    shape: Arc<ShapeDescriptor>,
    /// Field values, in shape order.
    slots: Box<[Option<Value>]>,
}

impl Record {
    /// All-unset record of the given shape.
    fn template(shape: &Arc<ShapeDescriptor>) -> Self {
        Self {
            shape: Arc::clone(shape),
            slots: vec![None; shape.len()].into_boxed_slice(),
        }
    }

    /// Build a record; the input is fully resolved before the record exists.
    fn from_input(shape: &Arc<ShapeDescriptor>, input: RecordInput) -> Result<Self> {
        let assignments = input::assignments(shape, input)?;
        let mut record = Self::template(shape);
        record.apply(assignments);
        Ok(record)
    }

    fn apply(&mut self, assignments: Vec<(usize, Value)>) {
        for (slot, value) in assignments {
            self.slots[slot] = Some(value);
        }
    }

    /// Get the shape descriptor.
    pub fn shape(&self) -> &Arc<ShapeDescriptor> {
        &self.shape
    }

    /// Get the shape name.
    pub fn shape_name(&self) -> &str {
        self.shape.name()
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.shape
            .field_index(name)
            .ok_or_else(|| Error::UndeclaredField {
                shape: self.shape.name().to_string(),
                field: name.to_string(),
            })
    }

    // ------------------------------------------------------------------
    // Named access
    // ------------------------------------------------------------------

    /// Read a field; `None` when declared but unset.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].as_ref())
    }

    /// Write a field, returning its previous value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].replace(value.into()))
    }

    /// Return a field to the unset state, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Result<Option<Value>> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].take())
    }

    /// Check whether a declared field holds a value.
    pub fn is_set(&self, name: &str) -> Result<bool> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].is_some())
    }

    // ------------------------------------------------------------------
    // Indexed access
    // ------------------------------------------------------------------

    /// Field value by name, unset reading as `null`.
    pub fn field(&self, name: &str) -> Result<&Value> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].as_ref().unwrap_or(&UNSET))
    }

    /// Mutable field value by name. An unset slot becomes `null` first.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut Value> {
        let slot = self.slot(name)?;
        Ok(self.slots[slot].get_or_insert(Value::Null))
    }

    /// Field name and value at a shape position.
    pub fn at(&self, index: usize) -> Option<(&str, Option<&Value>)> {
        let field = self.shape.fields().get(index)?;
        Some((field.name.as_str(), self.slots[index].as_ref()))
    }

    // ------------------------------------------------------------------
    // Bulk update
    // ------------------------------------------------------------------

    /// Merge supplied fields into the record.
    ///
    /// Fields not mentioned keep their values. The input is resolved in full
    /// first: on any error nothing is written.
    pub fn update(&mut self, input: impl Into<RecordInput>) -> Result<()> {
        let assignments = input::assignments(&self.shape, input.into())?;
        self.apply(assignments);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    /// Number of fields (set or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for records of the empty shape.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Field names in shape order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.shape.field_names()
    }

    /// Iterate `(name, value)` in shape order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.shape
            .field_names()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Field → value mapping in shape order, unset as `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.cloned().unwrap_or(Value::Null)))
            .collect()
    }

    /// The record as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> String {
        codec::encode(&self.to_map())
    }

    /// Indented JSON text.
    pub fn to_json_pretty(&self) -> String {
        codec::encode_pretty(&self.to_map())
    }

    // ------------------------------------------------------------------
    // Behaviors
    // ------------------------------------------------------------------

    /// Invoke a behavior declared by the record's shape.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let behavior = self
            .shape
            .behavior(name)
            .cloned()
            .ok_or_else(|| Error::UnknownBehavior {
                shape: self.shape.name().to_string(),
                behavior: name.to_string(),
            })?;
        (*behavior)(self, args)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.shape.name() == other.shape.name() && self.slots == other.slots
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.shape.name());
        for (name, value) in self.iter() {
            out.field(name, &value);
        }
        out.finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// Panics on undeclared fields, like [`Record::field`] would error.
    fn index(&self, name: &str) -> &Value {
        match self.field(name) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<&str> for Record {
    fn index_mut(&mut self, name: &str) -> &mut Value {
        match self.slot(name) {
            Ok(slot) => self.slots[slot].get_or_insert(Value::Null),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, Option<&'a Value>);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
