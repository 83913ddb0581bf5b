//! CLI commands and argument parsing

use crate::types::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate Go entity declarations from loosely-typed records
#[derive(Parser, Debug)]
#[command(name = "entity-codegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Input records file (JSON array, JSON Lines or YAML)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Input format
    #[arg(short, long, global = true)]
    pub format: Option<InputFormat>,

    /// Output directory for generated files
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Package name of generated files
    #[arg(long, global = true)]
    pub package: Option<String>,

    /// Field naming the entity of each record
    #[arg(long, global = true)]
    pub discriminator: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Infer schemas and write one file per entity
    Generate,

    /// Print the inferred schemas as JSON
    Inspect,

    /// Print the generated sources without writing files
    Render,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["entity-codegen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.input.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_generate_with_flags() {
        let cli = Cli::try_parse_from([
            "entity-codegen",
            "generate",
            "-i",
            "data.yaml",
            "-o",
            "gen",
            "--package",
            "models",
            "--discriminator",
            "kind",
            "--format",
            "yaml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Commands::Generate));
        assert_eq!(cli.input, Some(PathBuf::from("data.yaml")));
        assert_eq!(cli.output, Some(PathBuf::from("gen")));
        assert_eq!(cli.package.as_deref(), Some("models"));
        assert_eq!(cli.discriminator.as_deref(), Some("kind"));
        assert_eq!(cli.format, Some(InputFormat::Yaml));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_global_flag_before_subcommand() {
        let cli = Cli::try_parse_from(["entity-codegen", "-c", "codegen.yaml", "inspect"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Inspect));
        assert_eq!(cli.config, Some(PathBuf::from("codegen.yaml")));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["entity-codegen", "--format", "xml"]).is_err());
    }
}
