// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shapes: runtime descriptions of strict records.
//!
//! # Features
//!
//! - **ShapeDescriptor**: ordered fields, optional type tags, bound behaviors
//! - **ShapeBuilder**: fluent interface for building descriptors
//! - **Definition**: structural definitions (hand-written or derived)
//! - **normalize**: JSON text, mappings, field lists and definitions reduced
//!   to one descriptor
//!
//! # Example
//!
//! ```rust
//! use jsxn::{normalize, ShapeInput};
//!
//! let shape = normalize(Some("radios"), ShapeInput::from(["radio", "rig"])).unwrap();
//! assert_eq!(shape.field_names().collect::<Vec<_>>(), ["radio", "rig"]);
//!
//! let shape = normalize(None, ShapeInput::from(r#"{"schema": 100, "key": "value"}"#)).unwrap();
//! assert_eq!(shape.name(), "dynamic");
//! assert_eq!(shape.len(), 2);
//! ```

mod builder;
mod definition;
mod descriptor;
mod normalize;

pub use builder::ShapeBuilder;
pub use definition::{Definable, Definition, DefinitionFields};
pub use descriptor::{Behavior, BehaviorMap, FieldDescriptor, ShapeDescriptor};
pub use normalize::{normalize, normalize_name, ShapeInput, DEFAULT_SHAPE_NAME};
