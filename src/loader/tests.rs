//! Tests for record loader module

use super::*;
use crate::error::Error;
use crate::types::InputFormat;
use serde_json::json;
use std::io::Write;
use tempfile::tempdir;

// ============================================================================
// Field Value Tests
// ============================================================================

#[test]
fn test_field_value_from_json() {
    assert_eq!(FieldValue::from(&json!(42)), FieldValue::Integer(42));
    assert_eq!(FieldValue::from(&json!(-7)), FieldValue::Integer(-7));
    assert_eq!(FieldValue::from(&json!(1.5)), FieldValue::Float(1.5));
    assert_eq!(FieldValue::from(&json!("NBA")), FieldValue::from("NBA"));
    assert_eq!(FieldValue::from(&json!(true)), FieldValue::Boolean(true));
    assert_eq!(FieldValue::from(&json!(null)), FieldValue::Null);
    assert_eq!(FieldValue::from(&json!([1, 2])), FieldValue::Unsupported);
    assert_eq!(FieldValue::from(&json!({"a": 1})), FieldValue::Unsupported);
}

#[test]
fn test_field_value_large_unsigned_is_float() {
    let value = FieldValue::from(&json!(u64::MAX));
    assert!(matches!(value, FieldValue::Float(_)));
}

#[test]
fn test_field_value_as_text() {
    assert_eq!(FieldValue::from("sport").as_text(), Some("sport".to_string()));
    assert_eq!(FieldValue::Integer(3).as_text(), Some("3".to_string()));
    assert_eq!(FieldValue::Float(2.5).as_text(), Some("2.5".to_string()));
    assert_eq!(FieldValue::Boolean(false).as_text(), Some("false".to_string()));
    assert_eq!(FieldValue::Null.as_text(), None);
    assert_eq!(FieldValue::Unsupported.as_text(), None);
}

// ============================================================================
// Record Tests
// ============================================================================

#[test]
fn test_record_preserves_field_order() {
    let record = Record::new()
        .with("type", "League")
        .with("title", "NBA")
        .with("isActive", true);

    let names: Vec<_> = record.fields().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["type", "title", "isActive"]);
    assert_eq!(record.len(), 3);
    assert!(!record.is_empty());
}

#[test]
fn test_record_set_replaces_in_place() {
    let mut record = Record::new().with("a", 1).with("b", 2);
    record.set("a", "one");

    let fields: Vec<_> = record.fields().collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], ("a", &FieldValue::from("one")));
    assert_eq!(record.get("b"), Some(&FieldValue::Integer(2)));
    assert_eq!(record.get("c"), None);
}

#[test]
fn test_record_from_object_keeps_json_order() {
    let value = json!({"type": "Sport", "zeta": 1, "alpha": 2});
    let record = Record::from_object(value.as_object().unwrap());

    let names: Vec<_> = record.fields().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["type", "zeta", "alpha"]);
}

// ============================================================================
// JSON Parsing Tests
// ============================================================================

#[test]
fn test_parse_json_array() {
    let content = r#"[
        {"type": "League", "title": "NBA", "isActive": true},
        {"type": "Sport", "id": 1}
    ]"#;

    let records = parse_records(content, InputFormat::Json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("title"), Some(&FieldValue::from("NBA")));
    assert_eq!(records[1].get("id"), Some(&FieldValue::Integer(1)));
}

#[test]
fn test_parse_json_empty_array() {
    let records = parse_records("[]", InputFormat::Json).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_parse_json_not_an_array() {
    let err = parse_records(r#"{"type": "League"}"#, InputFormat::Json).unwrap_err();
    assert!(err.is_load_error());
}

#[test]
fn test_parse_json_element_not_an_object() {
    let err = parse_records(r#"[{"type": "League"}, 42]"#, InputFormat::Json).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_parse_json_malformed() {
    let err = parse_records("[{", InputFormat::Json).unwrap_err();
    assert!(err.is_load_error());
}

#[test]
fn test_parse_json_duplicate_key_keeps_last_value() {
    // Duplicate keys collapse inside the JSON parser: last value, first position
    let content = r#"[{"active": true, "type": "Sport", "active": "yes"}]"#;
    let records = parse_records(content, InputFormat::Json).unwrap();

    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0].get("active"), Some(&FieldValue::from("yes")));
}

#[test]
fn test_parse_auto_is_json() {
    let records = parse_records(r#"[{"type": "A"}]"#, InputFormat::Auto).unwrap();
    assert_eq!(records.len(), 1);
}

// ============================================================================
// JSON Lines Parsing Tests
// ============================================================================

#[test]
fn test_parse_jsonl() {
    let content = "{\"type\": \"League\", \"id\": 1}\n\n{\"type\": \"Sport\"}\n";
    let records = parse_records(content, InputFormat::Jsonl).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("type"), Some(&FieldValue::from("Sport")));
}

#[test]
fn test_parse_jsonl_reports_line_number() {
    let content = "{\"type\": \"League\"}\nnot json\n";
    let err = parse_records(content, InputFormat::Jsonl).unwrap_err();
    assert!(err.to_string().contains("line 2"));
    assert!(err.is_load_error());
}

// ============================================================================
// YAML Parsing Tests
// ============================================================================

#[test]
fn test_parse_yaml() {
    let content = r"
- type: League
  title: NBA
  isActive: true
- type: Sport
  rank: 2.5
";

    let records = parse_records(content, InputFormat::Yaml).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("isActive"), Some(&FieldValue::Boolean(true)));
    assert_eq!(records[1].get("rank"), Some(&FieldValue::Float(2.5)));
}

#[test]
fn test_parse_yaml_empty_document() {
    let records = parse_records("", InputFormat::Yaml).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_parse_yaml_not_a_sequence() {
    let err = parse_records("type: League\n", InputFormat::Yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_records_from_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{"type": "League", "title": "NBA"}}]"#).unwrap();

    let records = load_records(file.path(), InputFormat::Auto).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_load_records_detects_yaml_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.yaml");
    std::fs::write(&path, "- type: Sport\n  id: 1\n").unwrap();

    let records = load_records(&path, InputFormat::Auto).unwrap();
    assert_eq!(records[0].get("id"), Some(&FieldValue::Integer(1)));
}

#[test]
fn test_load_records_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_records(dir.path().join("missing.json"), InputFormat::Auto).unwrap_err();

    assert!(matches!(err, Error::InputRead { .. }));
    assert!(err.is_load_error());
    assert!(err.to_string().contains("missing.json"));
}
