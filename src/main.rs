//! Entity codegen CLI
//!
//! Command-line interface for generating entity declarations

use clap::Parser;
use entity_codegen::cli::{Cli, Runner};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout carries command output
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
