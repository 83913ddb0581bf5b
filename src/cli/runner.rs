//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::GeneratorConfig;
use crate::error::{Result, ResultExt};
use crate::generator::Generator;
use crate::loader::load_records;
use crate::output::{FsWriter, MemoryWriter};
use crate::render::Renderer;
use std::io::Write;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match self.cli.command.unwrap_or(Commands::Generate) {
            Commands::Generate => self.generate(&config),
            Commands::Inspect => self.inspect(&config),
            Commands::Render => self.render(&config),
        }
    }

    /// Build the effective configuration: file values, then CLI overrides
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(input) = &self.cli.input {
            config.input = input.clone();
        }
        if let Some(format) = self.cli.format {
            config.input_format = format;
        }
        if let Some(output) = &self.cli.output {
            config.output_dir = output.clone();
        }
        if let Some(package) = &self.cli.package {
            config.package = package.clone();
        }
        if let Some(discriminator) = &self.cli.discriminator {
            config.discriminator = discriminator.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Write one file per entity
    fn generate(&self, config: &GeneratorConfig) -> Result<()> {
        let generator = Generator::from_config(config);
        let mut writer = FsWriter::new(&config.output_dir, generator.renderer().extension());

        let report =
            generator.generate_from_file(&config.input, config.input_format, &mut writer)?;

        let mut stdout = std::io::stdout().lock();
        for path in writer.written() {
            writeln!(stdout, "{}", path.display()).context("Failed to write output")?;
        }

        if report.skipped > 0 {
            tracing::info!(
                "{} of {} records had no usable '{}' field",
                report.skipped,
                report.records,
                config.discriminator
            );
        }
        Ok(())
    }

    /// Print the inferred schemas
    fn inspect(&self, config: &GeneratorConfig) -> Result<()> {
        let records = load_records(&config.input, config.input_format)?;
        let generator = Generator::from_config(config);
        let (schemas, _) = generator.infer(&records);

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", schemas.to_json_pretty()).context("Failed to write output")?;
        Ok(())
    }

    /// Print the generated sources
    fn render(&self, config: &GeneratorConfig) -> Result<()> {
        let generator = Generator::from_config(config);
        let mut writer = MemoryWriter::new();
        generator.generate_from_file(&config.input, config.input_format, &mut writer)?;

        let extension = generator.renderer().extension();
        let mut stdout = std::io::stdout().lock();
        for (entity, source) in writer.iter() {
            writeln!(stdout, "// ==> {entity}.{extension}\n{source}")
                .context("Failed to write output")?;
        }
        Ok(())
    }
}
