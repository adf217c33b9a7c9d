//! # Embedding value store
//!
//! This crate implements the storage contract for embedding field values:
//! an embedding computed by an external provider is handed to this store as
//! a JSON-serializable structure and persisted as UTF-8 JSON text, or as the
//! gzip-compressed bytes of that text when the field is configured for
//! compression.
//!
//! ## Features
//!
//! - **Codec**: encode/decode between structured values and persisted bytes
//! - **Emptiness**: an absent or zero-length raw value means "unset"
//! - **Configuration**: per-field settings (gzip flag, source fields)
//! - **Provider check**: advisory validation that an embedding provider is
//!   configured, surfaced as warnings that never block saving
//!
//! The store never computes embeddings and never performs I/O of its own;
//! persistence, provider lookup, and operator messaging are supplied by the
//! caller through the traits in [`registry`].

pub mod codec;
pub mod config;
pub mod error;
pub mod registry;
pub mod validate;
pub mod value;

pub use codec::{decode, encode, is_empty};
pub use config::EmbeddingFieldConfig;
pub use error::{Result, StoreError};
pub use registry::{EMBEDDINGS_OPERATION, Messenger, ProviderDefaults, ProviderRegistry, RegistryError};
pub use validate::{ProviderCheck, check_embedding_provider};
pub use value::EmbeddingValue;
