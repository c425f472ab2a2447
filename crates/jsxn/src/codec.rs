// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON encoder/decoder for field/value mappings.
//!
//! Thin layer over `serde_json` built with `preserve_order`, so the key order
//! of a decoded document is the iteration order of the returned [`Map`].

use crate::{Error, Result};
use serde_json::{Map, Value};

/// Encode a mapping as compact JSON text.
pub fn encode(map: &Map<String, Value>) -> String {
    // Serializing a Map<String, Value> cannot fail: keys are strings and
    // values are already JSON.
    Value::Object(map.clone()).to_string()
}

/// Encode a mapping as indented JSON text.
pub fn encode_pretty(map: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(map).unwrap_or_else(|_| encode(map))
}

/// Decode JSON text into any JSON value.
pub fn decode_value(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Decode JSON text that must hold an object.
pub fn decode(text: &str) -> Result<Map<String, Value>> {
    match decode_value(text)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::MalformedInput(format!(
            "expected a JSON object, got {}",
            kind_name(&other)
        ))),
    }
}

/// Short name of a value's JSON kind, for messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
