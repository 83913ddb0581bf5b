//! CLI module
//!
//! Command-line interface for running the generator.
//!
//! # Commands
//!
//! - `generate` - Infer schemas and write one file per entity (default)
//! - `inspect` - Print the inferred schemas as JSON
//! - `render` - Print the generated sources without writing files

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
