//! Per-field configuration for stored embeddings.

use serde::{Deserialize, Serialize};

/// Configuration attached to an embedding field.
///
/// A config is treated as immutable once attached in a given context:
/// flipping `gzip_embedding` affects subsequently written values only, and
/// existing stored values are never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingFieldConfig {
    /// Whether stored values are gzip-compressed.
    pub gzip_embedding: bool,

    /// Names of the fields whose values were concatenated to produce the
    /// embedding, in display order. Used only by the preview renderer.
    pub source_fields: Vec<String>,
}

impl EmbeddingFieldConfig {
    /// Create a configuration with default settings (no gzip, no source fields).
    pub fn new() -> Self {
        Self {
            gzip_embedding: false,
            source_fields: Vec::new(),
        }
    }

    /// Enable or disable gzip compression of stored values.
    pub fn with_gzip(mut self, gzip: bool) -> Self {
        self.gzip_embedding = gzip;
        self
    }

    /// Append a source field name.
    pub fn with_source_field(mut self, name: impl Into<String>) -> Self {
        self.source_fields.push(name.into());
        self
    }
}

impl Default for EmbeddingFieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = EmbeddingFieldConfig::default();
        assert!(!config.gzip_embedding);
        assert!(config.source_fields.is_empty());
    }

    #[test]
    fn test_builder_preserves_source_field_order() {
        let config = EmbeddingFieldConfig::new()
            .with_gzip(true)
            .with_source_field("title")
            .with_source_field("body");

        assert!(config.gzip_embedding);
        assert_eq!(config.source_fields, vec!["title", "body"]);
    }

    #[test]
    fn test_settings_deserialize_with_missing_keys() {
        // Hosts persist settings as data; absent keys fall back to defaults.
        let config: EmbeddingFieldConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EmbeddingFieldConfig::default());

        let config: EmbeddingFieldConfig =
            serde_json::from_str(r#"{"gzip_embedding":true}"#).unwrap();
        assert!(config.gzip_embedding);
        assert!(config.source_fields.is_empty());
    }
}
