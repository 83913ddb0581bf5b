//! Renderer tests

use super::*;
use crate::codegen::DeclarationBuilder;
use crate::schema::{EntitySchema, Kind};
use pretty_assertions::assert_eq;

fn league() -> DeclarationSet {
    let schema = EntitySchema::new()
        .with_field("type", Kind::String)
        .with_field("title", Kind::String)
        .with_field("isActive", Kind::Boolean);
    DeclarationBuilder::new().build("League", &schema)
}

#[test]
fn test_render_league() {
    let source = GoRenderer::new().render(&league());

    let expected = r#"// Code generated by go generate; DO NOT EDIT.

package entity

const TYPE_LEAGUE = "League"

type League struct {
	Title    string `db:"title" json:"title"`
	IsActive bool   `db:"is_active" json:"isActive"`
}

func (e *League) CheckIsActive() bool {
	return e.IsActive == true
}
"#;
    assert_eq!(source, expected);
}

#[test]
fn test_render_without_header_and_custom_package() {
    let schema = EntitySchema::new()
        .with_field("type", Kind::String)
        .with_field("id", Kind::Integer);
    let set = DeclarationBuilder::new().build("Sport", &schema);

    let renderer = GoRenderer::new().with_package("models").with_header(None);
    assert_eq!(renderer.package(), "models");

    let expected = r#"package models

const TYPE_SPORT = "Sport"

type Sport struct {
	Id int `db:"id" json:"id"`
}
"#;
    assert_eq!(renderer.render(&set), expected);
}

#[test]
fn test_render_empty_header_is_omitted() {
    let renderer = GoRenderer::new().with_header(Some(String::new()));
    assert!(renderer.render(&league()).starts_with("package entity\n"));
}

#[test]
fn test_render_multiline_header() {
    let renderer = GoRenderer::new().with_header(Some("line one\nline two".to_string()));
    assert!(renderer
        .render(&league())
        .starts_with("// line one\n// line two\n\npackage entity\n"));
}

#[test]
fn test_render_type_without_fields() {
    let schema = EntitySchema::new()
        .with_field("type", Kind::String)
        .with_field("meta", Kind::Unsupported);
    let set = DeclarationBuilder::new().build("Venue", &schema);

    let source = GoRenderer::new().render(&set);
    assert!(source.contains("type Venue struct{}\n"));
    assert!(!source.contains("Meta"));
    assert!(!source.contains("func "));
}

#[test]
fn test_render_multiple_predicates() {
    let schema = EntitySchema::new()
        .with_field("live", Kind::Boolean)
        .with_field("featured", Kind::Boolean);
    let set = DeclarationBuilder::new().build("Match", &schema);
    let source = GoRenderer::new().render(&set);

    assert_eq!(source.matches("func (e *Match)").count(), 2);
    assert!(source.contains("func (e *Match) CheckLive() bool {\n\treturn e.Live == true\n}\n"));
    assert!(source
        .contains("func (e *Match) CheckFeatured() bool {\n\treturn e.Featured == true\n}\n"));
}

#[test]
fn test_render_is_deterministic() {
    let renderer = GoRenderer::new();
    assert_eq!(renderer.render(&league()), renderer.render(&league()));
}

#[test]
fn test_renderer_metadata() {
    let renderer = GoRenderer::default();
    assert_eq!(renderer.name(), "go");
    assert_eq!(renderer.extension(), "go");
}

#[test]
fn test_go_quote() {
    assert_eq!(go_quote("League"), r#""League""#);
    assert_eq!(go_quote(r#"say "hi""#), r#""say \"hi\"""#);
    assert_eq!(go_quote("a\\b"), r#""a\\b""#);
    assert_eq!(go_quote("tab\there"), r#""tab\there""#);
    assert_eq!(go_quote("\u{1}"), r#""\x01""#);
    assert_eq!(go_quote("é"), "\"é\"");
}

#[test]
fn test_tag_with_backtick_is_quoted() {
    let schema = EntitySchema::new().with_field("odd`name", Kind::String);
    let set = DeclarationBuilder::new().build("Weird", &schema);
    let source = GoRenderer::new().render(&set);

    assert!(source.contains(r#""db:\"odd`name\" json:\"odd`name\"""#));
}
