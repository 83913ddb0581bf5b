//! Common types used throughout entity-codegen
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Input Format
// ============================================================================

/// Encoding of the raw input file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick the format from the file extension
    #[default]
    Auto,
    /// A single JSON array of objects
    Json,
    /// One JSON object per line
    Jsonl,
    /// A YAML sequence of mappings
    Yaml,
}

impl InputFormat {
    /// Resolve `Auto` against a path's extension. Unknown extensions fall back to JSON.
    pub fn resolve(self, path: &Path) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("jsonl" | "ndjson") => InputFormat::Jsonl,
            Some("yaml" | "yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Auto => write!(f, "auto"),
            InputFormat::Json => write!(f, "json"),
            InputFormat::Jsonl => write!(f, "jsonl"),
            InputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
