//! Source renderers
//!
//! A renderer turns a [`DeclarationSet`](crate::codegen::DeclarationSet) into
//! source text for one target language. The pipeline only talks to the
//! [`Renderer`] trait, so adding a target means adding an implementation here.

mod go;

pub use go::{go_quote, GoRenderer, DEFAULT_HEADER, DEFAULT_PACKAGE};

use crate::codegen::DeclarationSet;

/// A source emitter for one target language
pub trait Renderer {
    /// Unique renderer identifier (e.g., "go")
    fn name(&self) -> &'static str;

    /// File extension for generated artifacts, without the dot
    fn extension(&self) -> &'static str;

    /// Render one entity's declarations as a complete source file
    fn render(&self, set: &DeclarationSet) -> String;
}

#[cfg(test)]
mod tests;
