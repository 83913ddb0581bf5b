//! Schema types

use crate::loader::FieldValue;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Inferred primitive kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Any number; integers and floats share this kind
    Integer,
    String,
    Boolean,
    /// Null or nested values; never emitted as a field
    Unsupported,
}

impl Kind {
    /// Infer the kind of a single value
    pub fn of(value: &FieldValue) -> Kind {
        match value {
            FieldValue::Integer(_) | FieldValue::Float(_) => Kind::Integer,
            FieldValue::String(_) => Kind::String,
            FieldValue::Boolean(_) => Kind::Boolean,
            FieldValue::Null | FieldValue::Unsupported => Kind::Unsupported,
        }
    }

    /// Check if fields of this kind make it into generated types
    pub fn is_supported(self) -> bool {
        self != Kind::Unsupported
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Integer => write!(f, "integer"),
            Kind::String => write!(f, "string"),
            Kind::Boolean => write!(f, "boolean"),
            Kind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// One field of an entity schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Field name as it appeared in the input
    pub name: String,
    /// Kind recorded by the most recent record that carried the field
    pub kind: Kind,
}

/// Merged field set of one entity.
///
/// Fields are kept in first-seen order; an index map gives constant-time
/// upserts. Re-inserting a field overwrites its kind but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySchema {
    fields: Vec<FieldSchema>,
    index: HashMap<String, usize>,
}

impl EntitySchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field, returning the kind it replaced
    pub fn upsert(&mut self, name: &str, kind: Kind) -> Option<Kind> {
        if let Some(&pos) = self.index.get(name) {
            let previous = self.fields[pos].kind;
            self.fields[pos].kind = kind;
            return Some(previous);
        }

        self.index.insert(name.to_string(), self.fields.len());
        self.fields.push(FieldSchema {
            name: name.to_string(),
            kind,
        });
        None
    }

    /// Add a field (builder style)
    #[must_use]
    pub fn with_field(mut self, name: &str, kind: Kind) -> Self {
        self.upsert(name, kind);
        self
    }

    /// Get the kind of a field
    pub fn get(&self, name: &str) -> Option<Kind> {
        self.index.get(name).map(|&pos| self.fields[pos].kind)
    }

    /// Check if a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate fields in first-seen order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> + '_ {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for EntitySchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.kind)?;
        }
        map.end()
    }
}

/// Schemas of every entity found in one inference pass, keyed by entity name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InferredSchemas {
    entities: BTreeMap<String, EntitySchema>,
}

impl InferredSchemas {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the accumulator for an entity, creating it on first use
    pub fn entry(&mut self, entity: &str) -> &mut EntitySchema {
        self.entities.entry(entity.to_string()).or_default()
    }

    /// Get an entity schema
    pub fn get(&self, entity: &str) -> Option<&EntitySchema> {
        self.entities.get(entity)
    }

    /// Iterate entities ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntitySchema)> + '_ {
        self.entities.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Entity names ordered by name
    pub fn names(&self) -> Vec<&str> {
        self.entities.keys().map(String::as_str).collect()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if no entity was found
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Counters from one inference pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferenceStats {
    /// Records seen
    pub records: usize,
    /// Records excluded for a missing, empty or unparseable discriminator
    pub skipped: usize,
}
