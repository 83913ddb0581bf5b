//! Output module
//!
//! Persists rendered artifacts, one per entity.
//!
//! # Overview
//!
//! This module provides:
//! - `ArtifactWriter` - The persistence seam used by the generator
//! - `FsWriter` - Atomic `<dir>/<Entity>.<ext>` file output
//! - `MemoryWriter` - In-memory output for dry runs

mod writer;

pub use writer::{ArtifactWriter, FsWriter, MemoryWriter};
