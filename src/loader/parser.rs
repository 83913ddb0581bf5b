//! Record parser
//!
//! Reads an input file and turns it into an ordered list of records.
//! Supports a JSON array of objects, JSON Lines and a YAML sequence of mappings.

use crate::error::{Error, Result};
use crate::loader::types::Record;
use crate::types::{InputFormat, JsonObject};
use std::fs;
use std::path::Path;

/// Load records from a file
///
/// `InputFormat::Auto` picks the format from the file extension.
///
/// # Examples
///
/// ```ignore
/// let records = load_records("data.json", InputFormat::Auto)?;
/// ```
pub fn load_records(path: impl AsRef<Path>, format: InputFormat) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let format = format.resolve(path);

    tracing::debug!("Loading records from {} as {}", path.display(), format);

    let content = fs::read_to_string(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content, format)?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from an in-memory string
///
/// `InputFormat::Auto` is treated as JSON since there is no extension to go by.
pub fn parse_records(content: &str, format: InputFormat) -> Result<Vec<Record>> {
    let objects = match format {
        InputFormat::Auto | InputFormat::Json => parse_json(content)?,
        InputFormat::Jsonl => parse_jsonl(content)?,
        InputFormat::Yaml => parse_yaml(content)?,
    };

    Ok(objects.iter().map(Record::from_object).collect())
}

fn parse_json(content: &str) -> Result<Vec<JsonObject>> {
    Ok(serde_json::from_str(content)?)
}

fn parse_jsonl(content: &str) -> Result<Vec<JsonObject>> {
    let mut objects = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let object = serde_json::from_str(line)
            .map_err(|e| Error::load(format!("line {}: {e}", index + 1)))?;
        objects.push(object);
    }

    Ok(objects)
}

fn parse_yaml(content: &str) -> Result<Vec<JsonObject>> {
    // An empty YAML document deserializes as null, not an empty sequence
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(content)?)
}
