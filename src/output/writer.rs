//! Artifact writers
//!
//! Persist one rendered source file per entity.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for rendered artifacts
pub trait ArtifactWriter {
    /// Persist the source text for one entity, replacing any previous artifact
    fn persist(&mut self, entity: &str, source: &str) -> Result<()>;
}

/// Writes `<dir>/<Entity>.<ext>` files
#[derive(Debug, Clone)]
pub struct FsWriter {
    /// Output directory
    dir: PathBuf,
    /// File extension without the dot
    extension: String,
    /// Files written so far, in write order
    written: Vec<PathBuf>,
}

impl FsWriter {
    /// Create a writer for the given directory and extension
    pub fn new(dir: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: extension.into(),
            written: Vec::new(),
        }
    }

    /// Get the output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact for an entity
    pub fn path_for(&self, entity: &str) -> PathBuf {
        self.dir.join(format!("{entity}.{}", self.extension))
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactWriter for FsWriter {
    fn persist(&mut self, entity: &str, source: &str) -> Result<()> {
        if entity.contains(['/', '\\']) || entity == ".." || entity == "." {
            return Err(Error::write(entity, "Entity name is not a valid file name"));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::write(
                entity,
                format!("Failed to create directory {}: {e}", self.dir.display()),
            )
        })?;

        // Write to temp file first, then rename for atomicity
        let path = self.path_for(entity);
        let temp_path = path.with_extension(format!("{}.tmp", self.extension));
        fs::write(&temp_path, source).map_err(|e| {
            Error::write(
                entity,
                format!("Failed to write {}: {e}", temp_path.display()),
            )
        })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::write(entity, format!("Failed to rename to {}: {e}", path.display()))
        })?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), source.len());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps artifacts in memory, keyed by entity name
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    artifacts: BTreeMap<String, String>,
}

impl MemoryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the artifact for an entity
    pub fn get(&self, entity: &str) -> Option<&str> {
        self.artifacts.get(entity).map(String::as_str)
    }

    /// Iterate artifacts ordered by entity name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.artifacts.iter().map(|(e, s)| (e.as_str(), s.as_str()))
    }

    /// Number of artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if nothing was written
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactWriter for MemoryWriter {
    fn persist(&mut self, entity: &str, source: &str) -> Result<()> {
        self.artifacts.insert(entity.to_string(), source.to_string());
        Ok(())
    }
}
