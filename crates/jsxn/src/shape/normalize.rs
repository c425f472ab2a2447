// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape normalizer: the four input forms reduced to one [`ShapeDescriptor`].

use crate::codec;
use crate::shape::{
    Definable, Definition, DefinitionFields, FieldDescriptor, ShapeBuilder, ShapeDescriptor,
};
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Name given to shapes derived without a caller-supplied or definition name.
pub const DEFAULT_SHAPE_NAME: &str = "dynamic";

/// Input forms accepted by [`normalize`].
#[derive(Clone)]
pub enum ShapeInput {
    /// Field → value mapping; iteration order is field order.
    Map(Map<String, Value>),
    /// JSON text holding an object.
    Json(String),
    /// Ordered field names without values.
    Fields(Vec<String>),
    /// Structural definition.
    Definition(Definition),
    /// The explicitly requested shape without fields.
    Empty,
}

impl ShapeInput {
    /// Field-list form from any iterator of names.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }

    /// Definition form for a [`Definable`] type.
    pub fn of<T: Definable>() -> Self {
        Self::Definition(T::definition())
    }

    /// Classify an already decoded JSON value.
    ///
    /// An object is the mapping form, an array of strings the field-list
    /// form; anything else is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::Map(map)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(Error::MalformedInput(format!(
                        "field list entries must be strings, got {}",
                        codec::kind_name(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Fields),
            other => Err(Error::MalformedInput(format!(
                "expected an object or a list of field names, got {}",
                codec::kind_name(&other)
            ))),
        }
    }

    /// Name implied by the input itself (definitions only).
    pub fn default_name(&self) -> Option<String> {
        match self {
            Self::Definition(def) => Some(normalize_name(def.name())),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for ShapeInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for ShapeInput {
    fn from(text: &str) -> Self {
        Self::Json(text.to_string())
    }
}

impl From<String> for ShapeInput {
    fn from(text: String) -> Self {
        Self::Json(text)
    }
}

impl From<Vec<String>> for ShapeInput {
    fn from(names: Vec<String>) -> Self {
        Self::Fields(names)
    }
}

impl From<Vec<&str>> for ShapeInput {
    fn from(names: Vec<&str>) -> Self {
        Self::fields(names)
    }
}

impl<const N: usize> From<[&str; N]> for ShapeInput {
    fn from(names: [&str; N]) -> Self {
        Self::fields(names)
    }
}

impl From<Definition> for ShapeInput {
    fn from(def: Definition) -> Self {
        Self::Definition(def)
    }
}

/// Derive a shape descriptor from any supported input form.
///
/// The descriptor is named `name` when given, else after the definition's
/// own (normalized) name, else [`DEFAULT_SHAPE_NAME`]. Pure: nothing is
/// registered.
pub fn normalize(name: Option<&str>, input: ShapeInput) -> Result<ShapeDescriptor> {
    let name = name
        .map(str::to_string)
        .or_else(|| input.default_name())
        .unwrap_or_else(|| DEFAULT_SHAPE_NAME.to_string());

    let shape = match input {
        ShapeInput::Map(map) => from_mapping(name, map)?,
        ShapeInput::Json(text) => from_mapping(name, codec::decode(&text)?)?,
        ShapeInput::Fields(names) => ShapeBuilder::new(name).fields(names).build()?,
        ShapeInput::Definition(def) => from_definition(name, &def)?,
        ShapeInput::Empty => ShapeBuilder::new(name).allow_empty().build()?,
    };

    log::debug!(
        "[normalize] shape '{}' derived with {} field(s), {} behavior(s)",
        shape.name(),
        shape.len(),
        shape.behavior_names().count()
    );
    Ok(shape)
}

fn from_mapping(name: String, map: Map<String, Value>) -> Result<ShapeDescriptor> {
    ShapeBuilder::new(name)
        .fields(map.keys().cloned())
        .seed(map)
        .build()
}

fn from_definition(name: String, def: &Definition) -> Result<ShapeDescriptor> {
    let DefinitionFields {
        names,
        type_tags,
        behaviors,
    } = def.read_fields();

    let mut builder = ShapeBuilder::new(name);
    if def.allows_empty() {
        builder = builder.allow_empty();
    }

    for (position, field_name) in names.into_iter().enumerate() {
        let mut field = FieldDescriptor::new(field_name);
        field.type_tag = type_tags
            .as_ref()
            .and_then(|tags| tags.get(position).cloned().flatten());
        builder = builder.field_descriptor(field);
    }

    for (behavior_name, body) in behaviors {
        builder = builder.shared_behavior(behavior_name, body);
    }

    builder.build()
}

/// Normalize a definition name into a shape identifier.
///
/// Generic arguments and any leading module path are dropped, and every
/// character outside `[A-Za-z0-9_]` becomes `_`.
pub fn normalize_name(raw: &str) -> String {
    let base = raw.split('<').next().unwrap_or(raw);
    let base = base.rsplit("::").next().unwrap_or(base).trim();

    let normalized: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if normalized.is_empty() {
        DEFAULT_SHAPE_NAME.to_string()
    } else {
        normalized
    }
}
