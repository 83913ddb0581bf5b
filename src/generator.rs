//! Generation pipeline
//!
//! Wires the stages of one batch run together:
//!
//! ```text
//! records ─> SchemaInferrer ─> DeclarationBuilder ─> Renderer ─> ArtifactWriter
//! ```
//!
//! Entities are processed in name order. The first write failure aborts the
//! run; artifacts written before it stay in place.

use crate::codegen::{DeclarationBuilder, DeclarationSet};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader::{load_records, Record};
use crate::output::ArtifactWriter;
use crate::render::{GoRenderer, Renderer};
use crate::schema::{InferenceStats, InferredSchemas, SchemaInferrer};
use crate::types::InputFormat;
use std::path::Path;
use tracing::info;

/// Summary of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Records read
    pub records: usize,
    /// Records without a usable discriminator
    pub skipped: usize,
    /// Entities written, in write order
    pub entities: Vec<String>,
}

impl From<InferenceStats> for GenerationReport {
    fn from(stats: InferenceStats) -> Self {
        Self {
            records: stats.records,
            skipped: stats.skipped,
            entities: Vec::new(),
        }
    }
}

/// Infers, builds, renders and persists entity declarations
#[derive(Debug, Clone)]
pub struct Generator<R: Renderer> {
    inferrer: SchemaInferrer,
    builder: DeclarationBuilder,
    renderer: R,
}

impl Generator<GoRenderer> {
    /// Create a Go generator from a config
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let header = Some(config.header.clone());
        let renderer = GoRenderer::new()
            .with_package(config.package.clone())
            .with_header(header);
        Generator::new(renderer).with_discriminator(&config.discriminator)
    }
}

impl<R: Renderer> Generator<R> {
    /// Create a generator with the default `type` discriminator
    pub fn new(renderer: R) -> Self {
        Self {
            inferrer: SchemaInferrer::new(),
            builder: DeclarationBuilder::new(),
            renderer,
        }
    }

    /// Use a different discriminator field for grouping and exclusion
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: &str) -> Self {
        self.inferrer = self.inferrer.with_discriminator(discriminator);
        self.builder = self.builder.with_discriminator(discriminator);
        self
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Infer entity schemas
    pub fn infer(&self, records: &[Record]) -> (InferredSchemas, InferenceStats) {
        self.inferrer.infer_with_stats(records)
    }

    /// Infer and build declarations, ordered by entity name
    pub fn declarations(&self, records: &[Record]) -> Vec<DeclarationSet> {
        let (schemas, _) = self.infer(records);
        self.builder.build_all(&schemas)
    }

    /// Run the pipeline over in-memory records
    pub fn generate<W: ArtifactWriter>(
        &self,
        records: &[Record],
        writer: &mut W,
    ) -> Result<GenerationReport> {
        let (schemas, stats) = self.infer(records);
        let mut report = GenerationReport::from(stats);

        for set in self.builder.build_all(&schemas) {
            let source = self.renderer.render(&set);
            writer.persist(&set.entity, &source)?;
            tracing::debug!(
                "Generated {} with {} fields and {} predicates",
                set.entity,
                set.type_decl.fields.len(),
                set.methods.len()
            );
            report.entities.push(set.entity);
        }

        info!(
            "Generated {} {} artifacts",
            report.entities.len(),
            self.renderer.name()
        );
        Ok(report)
    }

    /// Load records from a file and run the pipeline
    pub fn generate_from_file<W: ArtifactWriter>(
        &self,
        input: impl AsRef<Path>,
        format: InputFormat,
        writer: &mut W,
    ) -> Result<GenerationReport> {
        let records = load_records(input, format)?;
        self.generate(&records, writer)
    }
}
