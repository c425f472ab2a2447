// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by the normalizer, registry and records.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by shape derivation and record access.
///
/// Every failing operation leaves prior state (registry entries, record
/// values) exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Input text is not valid JSON, or not a JSON object where one is required.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    // ========================================================================
    // Shape Errors
    // ========================================================================
    /// Registry lookup for a name that was never registered (or was deleted).
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),
    /// A field list or definition names the same field twice.
    #[error("Duplicate field '{field}' in shape '{shape}'")]
    DuplicateField { shape: String, field: String },
    /// A shape would have zero fields and the caller did not opt into it.
    #[error("Shape '{0}' declares no fields")]
    EmptyDefinition(String),

    // ========================================================================
    // Record Errors
    // ========================================================================
    /// Construction or update supplied a field the shape does not have.
    #[error("Unknown field '{field}' for shape '{shape}'")]
    UnknownField { shape: String, field: String },
    /// Read or write of a field the shape does not declare.
    #[error("Field '{field}' is not declared by shape '{shape}'")]
    UndeclaredField { shape: String, field: String },
    /// Invocation of a behavior the shape does not carry.
    #[error("Shape '{shape}' has no behavior '{behavior}'")]
    UnknownBehavior { shape: String, behavior: String },
    /// Failure reported by a behavior body.
    #[error("Behavior failed: {0}")]
    Behavior(String),
}

impl Error {
    /// Build a [`Error::Behavior`] from any displayable cause.
    pub fn behavior(cause: impl std::fmt::Display) -> Self {
        Self::Behavior(cause.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
