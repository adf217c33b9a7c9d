//! Error types for the embedding value store.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the embedding value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Value could not be serialized to JSON.
    #[error("failed to serialize embedding: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored bytes are not valid gzip while the field is configured for gzip.
    #[error("invalid gzip data: {0}")]
    Gzip(#[source] std::io::Error),

    /// Stored text is not valid JSON.
    #[error("invalid embedding JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// A decode failure, located at the field and record it occurred on.
    #[error("failed to decode embedding for field `{field}` on record `{record}`: {source}")]
    Field {
        /// Name of the field holding the offending value.
        field: String,

        /// Identifier of the owning record.
        record: String,

        /// The underlying decode failure.
        #[source]
        source: Box<StoreError>,
    },
}

impl StoreError {
    /// Attach the field name and record identifier to a decode failure so an
    /// operator can locate the offending record.
    pub fn at(self, field: impl Into<String>, record: impl Into<String>) -> Self {
        StoreError::Field {
            field: field.into(),
            record: record.into(),
            source: Box::new(self),
        }
    }
}
