// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry of named shapes.
//!
//! A [`ShapeRegistry`] caches the descriptor derived for each logical schema
//! name so the normalization runs once per name. It is a plain value: create
//! one at startup and pass it to the code that needs it.
//!
//! # Example
//!
//! ```rust
//! use jsxn::{ShapeInput, ShapeRegistry};
//!
//! let mut registry = ShapeRegistry::new();
//! let records = registry
//!     .factory("dynamic", Some(ShapeInput::from(r#"{"schema": 100, "key": "value"}"#)))
//!     .unwrap();
//!
//! let mut record = records.template();
//! record.set("key", "populate").unwrap();
//! assert_eq!(record.to_json(), r#"{"schema":null,"key":"populate"}"#);
//!
//! // Later lookups need no input.
//! assert!(registry.factory("dynamic", None).is_ok());
//! ```

use crate::shape::{normalize, normalize_name, Definable, ShapeDescriptor, ShapeInput};
use crate::{Error, RecordFactory, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Name → shape descriptor cache.
///
/// Entries are replaced wholesale on re-registration; records and factories
/// built from a replaced descriptor keep using it.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Arc<ShapeDescriptor>>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or look up the shape stored under `name`.
    ///
    /// With `input`, the input is normalized and stored under `name`
    /// (replacing any previous entry) and the new descriptor is returned.
    /// Without it, the stored descriptor is returned, or
    /// [`Error::UnknownSchema`] if there is none. A failed normalization
    /// leaves the registry untouched.
    pub fn resolve(&mut self, name: &str, input: Option<ShapeInput>) -> Result<Arc<ShapeDescriptor>> {
        let Some(input) = input else {
            return self
                .shapes
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownSchema(name.to_string()));
        };

        let shape = Arc::new(normalize(Some(name), input)?);
        if self
            .shapes
            .insert(name.to_string(), Arc::clone(&shape))
            .is_some()
        {
            log::debug!("[ShapeRegistry::resolve] replaced shape '{}'", name);
        } else {
            log::debug!(
                "[ShapeRegistry::resolve] registered shape '{}' ({} fields)",
                name,
                shape.len()
            );
        }
        Ok(shape)
    }

    /// Normalize `input` and store it under `name`.
    pub fn register(
        &mut self,
        name: &str,
        input: impl Into<ShapeInput>,
    ) -> Result<Arc<ShapeDescriptor>> {
        self.resolve(name, Some(input.into()))
    }

    /// Register a [`Definable`] type under its own normalized name.
    pub fn register_definable<T: Definable>(&mut self) -> Result<RecordFactory> {
        let definition = T::definition();
        let name = normalize_name(definition.name());
        self.resolve(&name, Some(ShapeInput::Definition(definition)))
            .map(RecordFactory::new)
    }

    /// Like [`ShapeRegistry::resolve`], returning a factory bound to the shape.
    pub fn factory(&mut self, name: &str, input: Option<ShapeInput>) -> Result<RecordFactory> {
        self.resolve(name, input).map(RecordFactory::new)
    }

    /// Stored descriptor, if any.
    pub fn get(&self, name: &str) -> Option<&Arc<ShapeDescriptor>> {
        self.shapes.get(name)
    }

    /// Remove the shape stored under `name`.
    ///
    /// Fails with [`Error::UnknownSchema`] if nothing is stored there.
    pub fn delete(&mut self, name: &str) -> Result<Arc<ShapeDescriptor>> {
        let removed = self
            .shapes
            .remove(name)
            .ok_or_else(|| Error::UnknownSchema(name.to_string()))?;
        log::debug!("[ShapeRegistry::delete] removed shape '{}'", name);
        Ok(removed)
    }

    /// Check whether `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Registered names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Definition;
    use serde_json::json;

    #[test]
    fn test_resolve_without_registration() {
        let mut registry = ShapeRegistry::new();
        assert_eq!(
            registry.resolve("missing", None).unwrap_err(),
            Error::UnknownSchema("missing".into())
        );
    }

    #[test]
    fn test_resolve_caches() {
        let mut registry = ShapeRegistry::new();
        let first = registry.register("dynamic", ["a", "b"]).expect("register");
        let again = registry.resolve("dynamic", None).expect("cached");

        assert!(Arc::ptr_eq(&first, &again));
        assert!(registry.has("dynamic"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_old_records() {
        let mut registry = ShapeRegistry::new();
        let old = registry
            .factory("x", Some(ShapeInput::from(["a"])))
            .expect("register a");
        let old_record = old.build(json!({"a": 1})).expect("build");

        registry.register("x", ["b", "c"]).expect("register b");

        let current = registry.resolve("x", None).expect("resolve");
        assert_eq!(current.field_names().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(old_record.to_json(), r#"{"a":1}"#);
        assert_eq!(old.template().len(), 1);
    }

    #[test]
    fn test_failed_registration_keeps_entry() {
        let mut registry = ShapeRegistry::new();
        registry.register("x", ["a"]).expect("register");

        let err = registry.register("x", ["a", "a"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateField { .. }));
        assert_eq!(
            registry
                .resolve("x", None)
                .expect("still there")
                .field_names()
                .collect::<Vec<_>>(),
            ["a"]
        );
    }

    #[test]
    fn test_delete_then_reuse_name() {
        let mut registry = ShapeRegistry::new();
        registry.register("x", ["a"]).expect("register");

        registry.delete("x").expect("delete");
        assert!(!registry.has("x"));
        assert_eq!(
            registry.resolve("x", None).unwrap_err(),
            Error::UnknownSchema("x".into())
        );
        assert_eq!(
            registry.delete("x").unwrap_err(),
            Error::UnknownSchema("x".into())
        );

        let shape = registry.register("x", r#"{"z": 0}"#).expect("re-register");
        assert_eq!(shape.field_names().collect::<Vec<_>>(), ["z"]);
    }

    #[test]
    fn test_same_fields_distinct_names() {
        let mut registry = ShapeRegistry::new();
        let left = registry.register("left", ["a", "b"]).expect("left");
        let right = registry.register("right", ["a", "b"]).expect("right");

        assert!(!Arc::ptr_eq(&left, &right));
        assert_eq!(left.name(), "left");
        assert_eq!(right.name(), "right");
    }

    #[test]
    fn test_registry_names_definition_by_key() {
        let mut registry = ShapeRegistry::new();
        let shape = registry
            .register("radios", Definition::new("Radios").field("radio"))
            .expect("register");
        assert_eq!(shape.name(), "radios");
        assert!(!registry.has("Radios"));
    }
}
