// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # jsxn - strict records from runtime-derived shapes
//!
//! Derive a record shape once from a JSON document, a mapping, a list of
//! field names or a structural definition, then build, mutate and serialize
//! many records of that shape. Records are strict: reading or writing a
//! field the shape does not declare is an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsxn::{Result, ShapeInput, ShapeRegistry};
//! use jsxn::serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let mut registry = ShapeRegistry::new();
//!     let radios = registry.factory(
//!         "radios",
//!         Some(ShapeInput::from(["radio", "rig", "input", "output"])),
//!     )?;
//!
//!     let mut record = radios.build([("radio", json!(1)), ("rig", json!("a"))])?;
//!     record.update(r#"{"input": "mic"}"#)?;
//!     assert_eq!(
//!         record.to_json(),
//!         r#"{"radio":1,"rig":"a","input":"mic","output":null}"#
//!     );
//!
//!     assert!(record.set("antenna", 3).is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ShapeRegistry`] | Name → shape cache; entry point |
//! | [`ShapeDescriptor`] | Ordered fields, type tags, behaviors |
//! | [`RecordFactory`] | Builds records of one shape |
//! | [`Record`] | Strict field container |
//! | [`Definition`] / [`Definable`] | Structural definitions (derivable) |
//!
//! ## Modules Overview
//!
//! - [`shape`] - Descriptors, builder, definitions, normalizer
//! - [`record`] - Records, factories, construction inputs
//! - [`registry`] - Named shape registry
//! - [`codec`] - JSON encode/decode of field mappings

// Allow the derive macro to work inside this crate's tests
extern crate self as jsxn;

/// JSON encoding/decoding of field mappings.
pub mod codec;
mod error;
/// Records, record factories and construction inputs.
pub mod record;
/// Registry of named shapes.
pub mod registry;
/// Shape descriptors, definitions and the normalizer.
pub mod shape;

pub use error::{Error, Result};
pub use record::{Record, RecordFactory, RecordInput};
pub use registry::ShapeRegistry;
pub use shape::{
    normalize, normalize_name, Behavior, BehaviorMap, Definable, Definition, DefinitionFields,
    FieldDescriptor, ShapeBuilder, ShapeDescriptor, ShapeInput, DEFAULT_SHAPE_NAME,
};

/// `#[derive(Definable)]` for named-field structs.
#[cfg(feature = "derive")]
pub use jsxn_codegen::Definable;

pub use serde_json::{self, Map, Value};
