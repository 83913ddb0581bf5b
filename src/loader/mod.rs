//! Record loader module
//!
//! Reads the raw input and exposes it as an ordered sequence of loosely-typed records.
//!
//! # Overview
//!
//! The loader module provides:
//! - `Record` - An ordered mapping from field name to `FieldValue`
//! - `FieldValue` - Tagged scalar value (integer, float, string, boolean, null, unsupported)
//! - JSON, JSON Lines and YAML parsing

mod parser;
mod types;

pub use parser::{load_records, parse_records};
pub use types::{FieldValue, Record};

#[cfg(test)]
mod tests;
