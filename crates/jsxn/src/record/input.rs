// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Inputs accepted by record construction and bulk update.

use crate::codec;
use crate::shape::ShapeDescriptor;
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Field values supplied to [`RecordFactory::build`](crate::RecordFactory::build)
/// or [`Record::update`](crate::Record::update).
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput {
    /// Field → value mapping.
    Map(Map<String, Value>),
    /// JSON text holding an object.
    Json(String),
    /// Decoded JSON value holding an object.
    Value(Value),
    /// Keyword-style field → value pairs.
    Pairs(Vec<(String, Value)>),
}

impl RecordInput {
    /// Keyword-style input from any iterator of pairs.
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for RecordInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for RecordInput {
    fn from(text: &str) -> Self {
        Self::Json(text.to_string())
    }
}

impl From<String> for RecordInput {
    fn from(text: String) -> Self {
        Self::Json(text)
    }
}

impl From<Value> for RecordInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for RecordInput {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::pairs(pairs)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for RecordInput {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::pairs(pairs)
    }
}

/// Resolve every supplied field to its slot before anything is written.
///
/// Fails on the first field the shape does not declare, so callers can apply
/// the result knowing the whole input is valid. A JSON array assigns nothing.
pub(crate) fn assignments(
    shape: &ShapeDescriptor,
    input: RecordInput,
) -> Result<Vec<(usize, Value)>> {
    let pairs: Vec<(String, Value)> = match input {
        RecordInput::Map(map) => map.into_iter().collect(),
        RecordInput::Json(text) => object_pairs(codec::decode_value(&text)?)?,
        RecordInput::Value(value) => object_pairs(value)?,
        RecordInput::Pairs(pairs) => pairs,
    };

    pairs
        .into_iter()
        .map(|(field, value)| match shape.field_index(&field) {
            Some(slot) => Ok((slot, value)),
            None => Err(Error::UnknownField {
                shape: shape.name().to_string(),
                field,
            }),
        })
        .collect()
}

fn object_pairs(value: Value) -> Result<Vec<(String, Value)>> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Array(_) => Ok(Vec::new()),
        other => Err(Error::MalformedInput(format!(
            "expected a JSON object, got {}",
            codec::kind_name(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeBuilder;
    use serde_json::json;

    fn shape() -> ShapeDescriptor {
        ShapeBuilder::new("radios")
            .fields(["radio", "rig", "input", "output"])
            .build()
            .expect("build")
    }

    #[test]
    fn test_assignments_resolve_slots() {
        let resolved = assignments(&shape(), RecordInput::from([("rig", json!("a")), ("radio", json!(1))]))
            .expect("resolve");
        assert_eq!(resolved, vec![(1, json!("a")), (0, json!(1))]);
    }

    #[test]
    fn test_assignments_unknown_field() {
        let err = assignments(&shape(), RecordInput::from(r#"{"radio": 1, "antenna": 2}"#))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownField {
                shape: "radios".into(),
                field: "antenna".into()
            }
        );
    }

    #[test]
    fn test_assignments_array_is_noop() {
        let resolved = assignments(&shape(), RecordInput::from("[1, 2]")).expect("array");
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_assignments_scalar_rejected() {
        let err = assignments(&shape(), RecordInput::Value(json!(7))).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
