// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record factory bound to one shape.

use super::{Record, RecordInput};
use crate::shape::ShapeDescriptor;
use crate::Result;
use std::sync::Arc;

/// Builds records of a single shape.
///
/// Holds its own [`Arc`] to the descriptor, so re-registering the name in a
/// [`ShapeRegistry`](crate::ShapeRegistry) does not affect the factory or
/// the records it already produced.
#[derive(Debug, Clone)]
pub struct RecordFactory {
    shape: Arc<ShapeDescriptor>,
}

impl RecordFactory {
    /// Bind a factory to a shape.
    pub fn new(shape: Arc<ShapeDescriptor>) -> Self {
        Self { shape }
    }

    /// Get the shape descriptor.
    pub fn shape(&self) -> &Arc<ShapeDescriptor> {
        &self.shape
    }

    /// Get the shape name.
    pub fn name(&self) -> &str {
        self.shape.name()
    }

    /// Zero-argument construction: every field unset.
    pub fn template(&self) -> Record {
        Record::template(&self.shape)
    }

    /// Construct from a mapping, JSON text or field/value pairs.
    ///
    /// Unsupplied fields stay unset. Unknown fields and undecodable text
    /// fail before any record is produced.
    pub fn build(&self, input: impl Into<RecordInput>) -> Result<Record> {
        Record::from_input(&self.shape, input.into())
    }

    /// Record holding the values the shape was derived from.
    ///
    /// Same as [`RecordFactory::template`] for shapes without a seed.
    pub fn seeded(&self) -> Record {
        let mut record = self.template();
        if let Some(seed) = self.shape.seed() {
            for (slot, field) in self.shape.fields().iter().enumerate() {
                record.slots[slot] = seed.get(&field.name).cloned();
            }
        }
        record
    }
}

impl From<Arc<ShapeDescriptor>> for RecordFactory {
    fn from(shape: Arc<ShapeDescriptor>) -> Self {
        Self::new(shape)
    }
}
