//! Loader types
//!
//! The record model handed from the loader to the schema inferencer.

use crate::types::{JsonObject, JsonValue};

// ============================================================================
// Field Value
// ============================================================================

/// A single dynamically-typed value inside a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Whole number
    Integer(i64),
    /// Fractional number, or an integer outside the `i64` range
    Float(f64),
    /// Text
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// Explicit null
    Null,
    /// Arrays, objects and anything else without a scalar form
    Unsupported,
}

impl FieldValue {
    /// Textual form used when the value names an entity.
    ///
    /// Returns `None` for values with no meaningful text (null, nested structures).
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Null | FieldValue::Unsupported => None,
        }
    }

    /// Check if this is a scalar (integer, float, string or boolean)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldValue::Null | FieldValue::Unsupported)
    }
}

impl From<&JsonValue> for FieldValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map_or(FieldValue::Unsupported, FieldValue::Float),
            },
            JsonValue::String(s) => FieldValue::String(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => FieldValue::Unsupported,
        }
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => FieldValue::String(s),
            other => FieldValue::from(&other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One loosely-typed input record.
///
/// Fields keep the order the loader supplied them in. Setting a name that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object
    pub fn from_object(object: &JsonObject) -> Self {
        object
            .iter()
            .map(|(name, value)| (name.clone(), FieldValue::from(value)))
            .collect()
    }

    /// Add a field (builder style)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing any existing value with the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate fields in record order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}
