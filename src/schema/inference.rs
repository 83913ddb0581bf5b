//! Schema inference from loosely-typed records

use super::types::{InferenceStats, InferredSchemas, Kind};
use crate::loader::Record;
use crate::naming::title_case;
use tracing::debug;

/// Field that names the entity a record belongs to
pub const DEFAULT_DISCRIMINATOR: &str = "type";

/// Groups records by their discriminator and merges their field sets
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Name of the discriminator field
    discriminator: String,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create an inferrer using the `type` discriminator
    pub fn new() -> Self {
        Self {
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
        }
    }

    /// Use a different discriminator field
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    /// Get the discriminator field name
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// Entity name for a record: the title-cased text of its discriminator.
    ///
    /// `None` when the discriminator is missing, null, nested or empty.
    pub fn entity_name(&self, record: &Record) -> Option<String> {
        let text = record.get(&self.discriminator)?.as_text()?;
        let name = title_case(&text);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Infer entity schemas from records, processed in order
    pub fn infer(&self, records: &[Record]) -> InferredSchemas {
        self.infer_with_stats(records).0
    }

    /// Infer entity schemas and report how many records were skipped.
    ///
    /// Every field of a contributing record is upserted, the discriminator
    /// included, so a later record overwrites the kind an earlier one recorded.
    pub fn infer_with_stats(&self, records: &[Record]) -> (InferredSchemas, InferenceStats) {
        let mut schemas = InferredSchemas::new();
        let mut stats = InferenceStats {
            records: records.len(),
            skipped: 0,
        };

        for (index, record) in records.iter().enumerate() {
            let Some(entity) = self.entity_name(record) else {
                debug!(
                    "Skipping record {}: no usable '{}' value",
                    index, self.discriminator
                );
                stats.skipped += 1;
                continue;
            };

            let schema = schemas.entry(&entity);
            for (name, value) in record.fields() {
                let kind = Kind::of(value);
                if let Some(previous) = schema.upsert(name, kind) {
                    if previous != kind {
                        debug!(
                            "Record {} changes {}.{} from {} to {}",
                            index, entity, name, previous, kind
                        );
                    }
                }
            }
        }

        tracing::info!(
            "Inferred {} entities from {} records ({} skipped)",
            schemas.len(),
            stats.records,
            stats.skipped
        );

        (schemas, stats)
    }
}

/// Infer entity schemas using the default `type` discriminator (convenience function)
pub fn infer_entities(records: &[Record]) -> InferredSchemas {
    SchemaInferrer::new().infer(records)
}
