//! Generator configuration
//!
//! Settings for one generation run. Every field has a default, so an empty
//! YAML file is a valid configuration. CLI flags override file values.
//!
//! ```yaml
//! input: data.json
//! output_dir: entity
//! package: entity
//! discriminator: type
//! ```

use crate::error::{Error, Result};
use crate::render::{DEFAULT_HEADER, DEFAULT_PACKAGE};
use crate::schema::DEFAULT_DISCRIMINATOR;
use crate::types::InputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Input records file
    pub input: PathBuf,

    /// Input encoding
    pub input_format: InputFormat,

    /// Directory receiving one artifact per entity
    pub output_dir: PathBuf,

    /// Package clause of generated files
    pub package: String,

    /// Field naming the entity of each record
    pub discriminator: String,

    /// Comment placed at the top of generated files (empty = none)
    pub header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.json"),
            input_format: InputFormat::Auto,
            output_dir: PathBuf::from(DEFAULT_PACKAGE),
            package: DEFAULT_PACKAGE.to_string(),
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Invalid config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the input file
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the input format
    #[must_use]
    pub fn with_input_format(mut self, format: InputFormat) -> Self {
        self.input_format = format;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the package name
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the discriminator field
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    /// Set the header comment
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Check required values
    pub fn validate(&self) -> Result<()> {
        if self.discriminator.is_empty() {
            return Err(Error::config("discriminator cannot be empty"));
        }
        if self.package.is_empty() {
            return Err(Error::config("package cannot be empty"));
        }
        if self.input.as_os_str().is_empty() {
            return Err(Error::config("input cannot be empty"));
        }
        Ok(())
    }
}
