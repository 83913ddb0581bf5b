//! Declaration building module
//!
//! Turns inferred entity schemas into a language-neutral declaration IR
//! (constant, type definition, predicate methods) that renderers consume.

mod builder;
mod ir;

pub use builder::{DeclarationBuilder, CONST_PREFIX, DB_TAG, JSON_TAG, PREDICATE_PREFIX};
pub use ir::{
    ConstDecl, DeclarationSet, Expr, FieldDecl, MethodDecl, PrimitiveType, Tag, TypeDecl,
};
