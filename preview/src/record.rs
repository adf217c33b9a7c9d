//! Minimal record abstraction for preview rendering.

use std::collections::BTreeMap;

/// A record exposing named text fields.
///
/// Only the capability surface the renderer needs: field presence and value
/// lookup. A field may be present on the record yet hold no value.
pub trait SourceRecord {
    /// Whether the record has a field with this name.
    fn has_field(&self, name: &str) -> bool;

    /// The field's text value, or `None` when the field holds no value.
    fn field_value(&self, name: &str) -> Option<String>;
}

/// A map-backed record, useful for tests and standalone callers.
#[derive(Debug, Clone, Default)]
pub struct MapRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl MapRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with a value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Some(value.into()));
        self
    }

    /// Add a field that is present but holds no value.
    pub fn with_null_field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), None);
        self
    }
}

impl SourceRecord for MapRecord {
    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn field_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(Clone::clone)
    }
}
