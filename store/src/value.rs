//! The stored embedding scalar and its lifecycle.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::config::EmbeddingFieldConfig;
use crate::error::Result;

/// A single stored embedding value.
///
/// Owned exclusively by its containing record's field; cleared when the
/// field is unset and dropped with the record. The payload is opaque JSON
/// (optionally gzipped) produced by an external embedding provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddingValue {
    raw: Option<Vec<u8>>,
}

impl EmbeddingValue {
    /// Create an unset value.
    pub fn new() -> Self {
        Self { raw: None }
    }

    /// Wrap raw bytes already read from storage.
    pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The raw persisted bytes, if any.
    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// Consume the value, yielding the raw bytes for persistence.
    pub fn into_raw(self) -> Option<Vec<u8>> {
        self.raw
    }

    /// Whether the value counts as unset.
    ///
    /// Checked on the raw persisted form, without decompression or parsing.
    pub fn is_empty(&self) -> bool {
        codec::is_empty(self.raw())
    }

    /// Encode and store an embedding under the given configuration.
    pub fn write<T: Serialize>(&mut self, value: &T, config: &EmbeddingFieldConfig) -> Result<()> {
        self.raw = Some(codec::encode(value, config)?);
        Ok(())
    }

    /// Decode the stored embedding, or `None` when the value is unset.
    pub fn read<T: DeserializeOwned>(&self, config: &EmbeddingFieldConfig) -> Result<Option<T>> {
        match self.raw() {
            Some(raw) if !raw.is_empty() => Ok(Some(codec::decode(raw, config)?)),
            _ => Ok(None),
        }
    }

    /// Like [`EmbeddingValue::read`], attaching the field name and record
    /// identifier to any decode failure so an operator can locate the
    /// offending record.
    pub fn read_located<T: DeserializeOwned>(
        &self,
        config: &EmbeddingFieldConfig,
        field: &str,
        record: &str,
    ) -> Result<Option<T>> {
        self.read(config).map_err(|e| e.at(field, record))
    }

    /// Unset the value.
    pub fn clear(&mut self) {
        self.raw = None;
    }
}
