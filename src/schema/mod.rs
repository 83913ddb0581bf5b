//! Schema inference module
//!
//! Groups records by their discriminator field and merges the field sets of
//! every record that names the same entity.
//!
//! # Rules
//!
//! - **Grouping**: the entity name is the title-cased discriminator text
//! - **Exclusion**: records without a usable discriminator contribute nothing
//! - **Union**: a field seen in any record of an entity stays in its schema
//! - **Last-seen-wins**: conflicting kinds resolve to the most recent record
//! - **Number merge**: integers and floats share the `Integer` kind

mod inference;
mod types;

pub use inference::{infer_entities, SchemaInferrer, DEFAULT_DISCRIMINATOR};
pub use types::{EntitySchema, FieldSchema, InferenceStats, InferredSchemas, Kind};
