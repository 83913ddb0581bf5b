//! Declaration IR
//!
//! Language-neutral nodes produced by the builder. Renderers turn these into
//! source text; nothing here knows about a target syntax.

/// Primitive type of a generated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Integer,
    Text,
    Boolean,
}

/// Named string constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    pub name: String,
    pub value: String,
}

/// Serialization tag attached to a field, e.g. `json:"title"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One field of a type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// In-source identifier
    pub name: String,
    /// Field name in the input records
    pub source_name: String,
    pub ty: PrimitiveType,
    pub tags: Vec<Tag>,
}

impl FieldDecl {
    /// Look up a tag value by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}

/// Record-like type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    /// Look up a field by its in-source identifier
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Expression in a method body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Field of the method receiver
    ReceiverField(String),
    /// Boolean literal
    Bool(bool),
    /// Equality comparison
    Eq(Box<Expr>, Box<Expr>),
}

/// Parameterless method bound to a type, whose body returns one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Type the method is bound to
    pub receiver: String,
    pub name: String,
    pub returns: PrimitiveType,
    pub body: Expr,
}

/// Everything generated for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSet {
    pub entity: String,
    pub constant: ConstDecl,
    pub type_decl: TypeDecl,
    pub methods: Vec<MethodDecl>,
}
