//! Declaration builder
//!
//! Maps one entity schema onto its declaration set:
//!
//! - constant `TYPE_<ENTITY>` holding the entity name
//! - type `<Entity>` with one field per supported schema field
//! - `Check<Field>` predicate for every boolean field

use super::ir::{
    ConstDecl, DeclarationSet, Expr, FieldDecl, MethodDecl, PrimitiveType, Tag, TypeDecl,
};
use crate::naming::{is_go_identifier, snake_case, title_case, upper_case};
use crate::schema::{EntitySchema, InferredSchemas, Kind, DEFAULT_DISCRIMINATOR};
use tracing::warn;

/// Prefix of the entity name constant
pub const CONST_PREFIX: &str = "TYPE_";

/// Prefix of boolean predicate methods
pub const PREDICATE_PREFIX: &str = "Check";

/// Tag carrying the original field name
pub const JSON_TAG: &str = "json";

/// Tag carrying the snake_cased field name
pub const DB_TAG: &str = "db";

/// Builds declaration sets from entity schemas
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    /// Field excluded from generated types
    discriminator: String,
}

impl Default for DeclarationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationBuilder {
    /// Create a builder excluding the `type` discriminator
    pub fn new() -> Self {
        Self {
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
        }
    }

    /// Exclude a different discriminator field
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    /// Build the declarations for one entity
    pub fn build(&self, entity: &str, schema: &EntitySchema) -> DeclarationSet {
        let constant = ConstDecl {
            name: format!("{CONST_PREFIX}{}", upper_case(entity)),
            value: entity.to_string(),
        };
        check_identifier(&constant.name, entity);
        check_identifier(entity, entity);

        let mut fields = Vec::new();
        let mut methods = Vec::new();

        for field in schema.fields() {
            if field.name == self.discriminator {
                continue;
            }

            let Some(ty) = primitive_type(field.kind) else {
                continue;
            };

            let ident = title_case(&field.name);
            check_identifier(&ident, entity);

            if ty == PrimitiveType::Boolean {
                methods.push(predicate(entity, &ident));
            }

            fields.push(FieldDecl {
                name: ident,
                source_name: field.name.clone(),
                ty,
                tags: vec![
                    Tag::new(JSON_TAG, field.name.clone()),
                    Tag::new(DB_TAG, snake_case(&field.name)),
                ],
            });
        }

        DeclarationSet {
            entity: entity.to_string(),
            constant,
            type_decl: TypeDecl {
                name: entity.to_string(),
                fields,
            },
            methods,
        }
    }

    /// Build the declarations for every entity, ordered by entity name
    pub fn build_all(&self, schemas: &InferredSchemas) -> Vec<DeclarationSet> {
        schemas
            .iter()
            .map(|(entity, schema)| self.build(entity, schema))
            .collect()
    }
}

/// Kind to primitive mapping; unsupported kinds have no field
fn primitive_type(kind: Kind) -> Option<PrimitiveType> {
    match kind {
        Kind::Integer => Some(PrimitiveType::Integer),
        Kind::String => Some(PrimitiveType::Text),
        Kind::Boolean => Some(PrimitiveType::Boolean),
        Kind::Unsupported => None,
    }
}

/// `Check<Field>` returning `receiver.Field == true`
fn predicate(entity: &str, field_ident: &str) -> MethodDecl {
    MethodDecl {
        receiver: entity.to_string(),
        name: format!("{PREDICATE_PREFIX}{field_ident}"),
        returns: PrimitiveType::Boolean,
        body: Expr::Eq(
            Box::new(Expr::ReceiverField(field_ident.to_string())),
            Box::new(Expr::Bool(true)),
        ),
    }
}

fn check_identifier(ident: &str, entity: &str) {
    if !is_go_identifier(ident) {
        warn!(
            "Entity {}: '{}' is not a valid identifier, generated code may not compile",
            entity, ident
        );
    }
}
