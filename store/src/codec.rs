//! Codec between structured embedding values and their persisted bytes.
//!
//! The persisted format is UTF-8 JSON text, or the gzip-compressed bytes of
//! that text when the field is configured for compression. The gzip toggle
//! is a storage-density optimization only: the logical value observed after
//! decode is identical for either setting.

use std::io::Read;

use flate2::Compression;
use flate2::read::{GzDecoder, GzEncoder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::EmbeddingFieldConfig;
use crate::error::{Result, StoreError};

/// Serialize a value into its persisted byte form.
///
/// No size limit is imposed here; the persistence layer's column width
/// bounds practical size.
pub fn encode<T: Serialize>(value: &T, config: &EmbeddingFieldConfig) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(value).map_err(StoreError::Encode)?;

    if !config.gzip_embedding {
        return Ok(json);
    }

    let mut encoder = GzEncoder::new(json.as_slice(), Compression::default());
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).map_err(StoreError::Gzip)?;
    debug!(
        "Compressed {} bytes of embedding JSON to {}",
        json.len(),
        compressed.len()
    );

    Ok(compressed)
}

/// Parse persisted bytes back into a structured value.
///
/// Fails explicitly when the bytes are not valid gzip (while configured for
/// gzip) or the resulting text is not valid JSON; a corrupted embedding is
/// never silently replaced with a default. The stored bytes are left
/// untouched by a failed decode.
pub fn decode<T: DeserializeOwned>(raw: &[u8], config: &EmbeddingFieldConfig) -> Result<T> {
    if config.gzip_embedding {
        let mut decoder = GzDecoder::new(raw);
        let mut json = Vec::new();
        decoder.read_to_end(&mut json).map_err(StoreError::Gzip)?;
        serde_json::from_slice(&json).map_err(StoreError::Json)
    } else {
        serde_json::from_slice(raw).map_err(StoreError::Json)
    }
}

/// Whether a raw persisted value counts as unset.
///
/// Runs on the raw form, before any decompression or parsing, so emptiness
/// detection never fails on malformed data.
pub fn is_empty(raw: Option<&[u8]>) -> bool {
    raw.is_none_or(<[u8]>::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn plain() -> EmbeddingFieldConfig {
        EmbeddingFieldConfig::new()
    }

    fn gzipped() -> EmbeddingFieldConfig {
        EmbeddingFieldConfig::new().with_gzip(true)
    }

    #[test]
    fn test_encode_plain_is_literal_json() {
        let value = json!({"vector": [0.1, 0.2, 0.3]});
        let raw = encode(&value, &plain()).unwrap();
        assert_eq!(raw, br#"{"vector":[0.1,0.2,0.3]}"#);
    }

    #[test]
    fn test_round_trip_plain() {
        let value = json!({"vector": [0.1, 0.2, 0.3], "dim": 3});
        let raw = encode(&value, &plain()).unwrap();
        let decoded: serde_json::Value = decode(&raw, &plain()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_round_trip_gzip() {
        let value = json!({"vector": [0.1, 0.2, 0.3], "dim": 3});
        let raw = encode(&value, &gzipped()).unwrap();
        let decoded: serde_json::Value = decode(&raw, &gzipped()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_gzip_output_is_not_json() {
        let value = json!({"vector": [0.1, 0.2, 0.3]});
        let raw = encode(&value, &gzipped()).unwrap();
        assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_err());
    }

    #[test]
    fn test_gzip_shrinks_repetitive_payload() {
        let vector: Vec<f64> = (0..256).map(|i| f64::from(i % 8) / 10.0).collect();
        let value = json!({"vector": vector, "model": "text-embedding-3-small"});

        let plain_raw = encode(&value, &plain()).unwrap();
        let gzip_raw = encode(&value, &gzipped()).unwrap();

        assert!(plain_raw.len() >= 1000);
        assert!(gzip_raw.len() < plain_raw.len());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let result: Result<serde_json::Value> = decode(b"not-json", &plain());
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_gzip() {
        let result: Result<serde_json::Value> = decode(b"not-gzip-bytes", &gzipped());
        assert!(matches!(result, Err(StoreError::Gzip(_))));
    }

    #[test]
    fn test_is_empty_on_raw_form() {
        assert!(is_empty(None));
        assert!(is_empty(Some(b"")));
        assert!(!is_empty(Some(b"{}")));
        // Malformed bytes are still "present"; emptiness never parses.
        assert!(!is_empty(Some(b"\x1f\x8b\x00garbage")));
    }
}
