//! Go renderer
//!
//! Emits gofmt-formatted Go: struct fields and types are aligned in columns,
//! struct tags are sorted by key, methods use a pointer receiver named `e`.

use super::Renderer;
use crate::codegen::{
    ConstDecl, DeclarationSet, Expr, FieldDecl, MethodDecl, PrimitiveType, TypeDecl,
};
use std::fmt::Write;

/// Package clause used when none is configured
pub const DEFAULT_PACKAGE: &str = "entity";

/// Generated-code marker placed above the package clause
pub const DEFAULT_HEADER: &str = "Code generated by go generate; DO NOT EDIT.";

/// Receiver identifier in generated methods
const RECEIVER: &str = "e";

/// Renders declaration sets as Go source files
#[derive(Debug, Clone)]
pub struct GoRenderer {
    package: String,
    header: Option<String>,
}

impl Default for GoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GoRenderer {
    /// Create a renderer for package `entity` with the generated-code header
    pub fn new() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }

    /// Set the package name
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the header comment; `None` or an empty string omits it
    #[must_use]
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header.filter(|h| !h.is_empty());
        self
    }

    /// Get the package name
    pub fn package(&self) -> &str {
        &self.package
    }

    fn render_const(&self, out: &mut String, constant: &ConstDecl) {
        let _ = writeln!(
            out,
            "const {} = {}",
            constant.name,
            go_quote(&constant.value)
        );
    }

    fn render_type(&self, out: &mut String, ty: &TypeDecl) {
        if ty.fields.is_empty() {
            let _ = writeln!(out, "type {} struct{{}}", ty.name);
            return;
        }

        let rows: Vec<(&str, &str, String)> = ty
            .fields
            .iter()
            .map(|f| (f.name.as_str(), go_type(f.ty), render_tags(f)))
            .collect();

        let name_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
        let type_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

        let _ = writeln!(out, "type {} struct {{", ty.name);
        for (name, go_ty, tags) in &rows {
            let _ = writeln!(
                out,
                "\t{}{} {}{} {}",
                name,
                pad(name.chars().count(), name_width),
                go_ty,
                pad(go_ty.len(), type_width),
                tags
            );
        }
        out.push_str("}\n");
    }

    fn render_method(&self, out: &mut String, method: &MethodDecl) {
        let _ = writeln!(
            out,
            "func ({RECEIVER} *{}) {}() {} {{",
            method.receiver,
            method.name,
            go_type(method.returns)
        );
        let _ = writeln!(out, "\treturn {}", render_expr(&method.body));
        out.push_str("}\n");
    }
}

impl Renderer for GoRenderer {
    fn name(&self) -> &'static str {
        "go"
    }

    fn extension(&self) -> &'static str {
        "go"
    }

    fn render(&self, set: &DeclarationSet) -> String {
        let mut out = String::new();

        if let Some(header) = &self.header {
            for line in header.lines() {
                let _ = writeln!(out, "// {line}");
            }
            out.push('\n');
        }

        let _ = writeln!(out, "package {}", self.package);
        out.push('\n');

        self.render_const(&mut out, &set.constant);
        out.push('\n');

        self.render_type(&mut out, &set.type_decl);

        for method in &set.methods {
            out.push('\n');
            self.render_method(&mut out, method);
        }

        out
    }
}

fn go_type(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Integer => "int",
        PrimitiveType::Text => "string",
        PrimitiveType::Boolean => "bool",
    }
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::ReceiverField(field) => format!("{RECEIVER}.{field}"),
        Expr::Bool(b) => b.to_string(),
        Expr::Eq(lhs, rhs) => format!("{} == {}", render_expr(lhs), render_expr(rhs)),
    }
}

/// Struct tag literal with keys sorted, e.g. `` `db:"is_active" json:"isActive"` ``
fn render_tags(field: &FieldDecl) -> String {
    let mut tags: Vec<_> = field.tags.iter().collect();
    tags.sort_by(|a, b| a.key.cmp(&b.key));

    let inner = tags
        .iter()
        .map(|t| format!("{}:{}", t.key, go_quote(&t.value)))
        .collect::<Vec<_>>()
        .join(" ");

    if inner.contains('`') {
        go_quote(&inner)
    } else {
        format!("`{inner}`")
    }
}

fn pad(len: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(len))
}

/// Interpreted Go string literal
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xff {
                    let _ = write!(out, "\\x{code:02x}");
                } else {
                    let _ = write!(out, "\\u{code:04x}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
