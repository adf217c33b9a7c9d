//! Collaborator abstractions supplied by the host environment.
//!
//! The store never looks these up from global state; callers inject them
//! where needed (see [`crate::validate`]).

use thiserror::Error;

/// Operation type used when resolving the default embedding provider.
pub const EMBEDDINGS_OPERATION: &str = "embeddings";

/// The default provider/model pair configured for an operation type.
///
/// Either id may be missing or blank when the host is only partially
/// configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderDefaults {
    /// Identifier of the configured provider.
    pub provider_id: Option<String>,

    /// Identifier of the configured model.
    pub model_id: Option<String>,
}

impl ProviderDefaults {
    /// Create defaults with both ids set.
    pub fn new(provider_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(provider_id.into()),
            model_id: Some(model_id.into()),
        }
    }

    /// Whether both ids are present and non-empty.
    pub fn is_complete(&self) -> bool {
        let set = |id: &Option<String>| id.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.provider_id) && set(&self.model_id)
    }
}

/// The provider registry could not be reached or is misconfigured.
#[derive(Error, Debug)]
#[error("provider registry unavailable: {0}")]
pub struct RegistryError(pub String);

/// Registry of AI providers, keyed by operation type.
pub trait ProviderRegistry {
    /// Look up the default provider/model for an operation type.
    fn default_provider(
        &self,
        operation_type: &str,
    ) -> std::result::Result<ProviderDefaults, RegistryError>;
}

/// Fire-and-forget channel for surfacing advisory warnings to an operator.
pub trait Messenger {
    /// Record a warning message. No acknowledgement is expected.
    fn warn(&self, message: &str);
}
