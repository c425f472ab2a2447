// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Subcommand implementations
//!
//! Each command returns its report as text so `main` only does the printing.

use anyhow::{bail, Context, Result};
use jsxn::{codec, RecordFactory, ShapeInput, ShapeRegistry, Value};
use std::io::Read;
use std::path::Path;

use crate::config::Config;

/// Read a file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Derive a shape input from a JSON document.
///
/// Objects use the mapping form, arrays of strings the field-list form, and
/// arrays of objects take their first element as the mapping.
pub fn shape_input(document: &str) -> Result<ShapeInput> {
    let value = codec::decode_value(document).context("Shape document is not valid JSON")?;
    let value = match value {
        Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
            items.into_iter().next().unwrap_or_default()
        }
        other => other,
    };
    Ok(ShapeInput::from_value(value)?)
}

fn factory(document: &str, name: &str) -> Result<RecordFactory> {
    let input = shape_input(document)?;
    let mut registry = ShapeRegistry::new();
    let factory = registry
        .factory(name, Some(input))
        .with_context(|| format!("Cannot derive shape '{}'", name))?;
    tracing::debug!(
        "[jsxnctl] shape '{}' with {} field(s)",
        factory.name(),
        factory.shape().len()
    );
    Ok(factory)
}

/// `fields`: one `index name` line per declared field
pub fn fields(document: &str, config: &Config) -> Result<String> {
    let factory = factory(document, &config.shape_name)?;
    let mut out = String::new();
    for (index, name) in factory.shape().field_names().enumerate() {
        out.push_str(&format!("{} {}\n", index, name));
    }
    Ok(out)
}

/// `template`: the zero-argument record of the derived shape
pub fn template(document: &str, config: &Config) -> Result<String> {
    let record = factory(document, &config.shape_name)?.template();
    let mut out = if config.pretty {
        record.to_json_pretty()
    } else {
        record.to_json()
    };
    out.push('\n');
    Ok(out)
}

/// Outcome of a `validate` run
#[derive(Debug, Default)]
pub struct Validation {
    pub report: String,
    pub passed: usize,
    pub failed: usize,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Split a records document into individual values.
///
/// A top-level JSON array yields its elements; otherwise every non-blank line
/// is parsed on its own (JSON Lines).
fn record_values(records: &str) -> Vec<Result<Value, String>> {
    if records.trim_start().starts_with('[') {
        return match codec::decode_value(records) {
            Ok(Value::Array(items)) => items.into_iter().map(Ok).collect(),
            Ok(_) => vec![Err("expected a JSON array of records".to_string())],
            Err(e) => vec![Err(e.to_string())],
        };
    }
    records
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| codec::decode_value(line).map_err(|e| e.to_string()))
        .collect()
}

/// `validate`: build every record strictly against the shape
pub fn validate(shape_document: &str, records: &str, config: &Config) -> Result<Validation> {
    let factory = factory(shape_document, &config.shape_name)?;
    let mut validation = Validation::default();

    for (index, value) in record_values(records).into_iter().enumerate() {
        let outcome = value.and_then(|value| match value {
            Value::Object(map) => factory.build(map).map_err(|e| e.to_string()),
            other => Err(format!("record {} is not an object: {}", index, other)),
        });
        match outcome {
            Ok(_) => validation.passed += 1,
            Err(message) => {
                tracing::debug!("[jsxnctl] record {} rejected: {}", index, message);
                validation.failed += 1;
                validation
                    .report
                    .push_str(&format!("[FAIL] record {}: {}\n", index, message));
            }
        }
    }

    if validation.passed + validation.failed == 0 {
        bail!("No records to validate");
    }

    let status = if validation.is_ok() { "OK" } else { "FAIL" };
    validation.report.push_str(&format!(
        "[{}] {} passed, {} failed against shape '{}'\n",
        status,
        validation.passed,
        validation.failed,
        factory.name()
    ));
    Ok(validation)
}
