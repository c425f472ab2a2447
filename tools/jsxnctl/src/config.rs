// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! jsxnctl configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied when the command line does not say otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name given to shapes derived from documents
    pub shape_name: String,

    /// Indent JSON output
    pub pretty: bool,

    /// Tracing filter directive (e.g. "info", "jsxn=debug")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape_name: jsxn::DEFAULT_SHAPE_NAME.to_string(),
            pretty: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Invalid jsxnctl configuration")
    }

    /// Load from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml)
    }
}

/// Config builder for fluent API
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base: Option<Config>,
    shape_name: Option<String>,
    pretty: Option<bool>,
    log_level: Option<String>,
}

impl ConfigBuilder {
    /// Start from a loaded config instead of the defaults
    pub fn base(mut self, config: Config) -> Self {
        self.base = Some(config);
        self
    }

    /// Set the shape name
    pub fn shape_name(mut self, name: impl Into<String>) -> Self {
        self.shape_name = Some(name.into());
        self
    }

    /// Set pretty output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Set the tracing filter directive
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build the config
    pub fn build(self) -> Config {
        let base = self.base.unwrap_or_default();
        Config {
            shape_name: self.shape_name.unwrap_or(base.shape_name),
            pretty: self.pretty.unwrap_or(base.pretty),
            log_level: self.log_level.unwrap_or(base.log_level),
        }
    }
}
