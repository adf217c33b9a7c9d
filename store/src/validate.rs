//! Advisory validation of the embedding provider configuration.

use tracing::{debug, warn};

use crate::registry::{EMBEDDINGS_OPERATION, Messenger, ProviderDefaults, ProviderRegistry};

/// Outcome of the advisory provider check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCheck {
    /// A provider and model are configured for embeddings.
    Available {
        /// Identifier of the configured provider.
        provider_id: String,

        /// Identifier of the configured model.
        model_id: String,
    },

    /// The registry answered, but the provider or model is missing.
    Incomplete {
        /// Provider id, if any was configured.
        provider_id: Option<String>,

        /// Model id, if any was configured.
        model_id: Option<String>,
    },

    /// The registry itself could not be reached.
    Unreachable {
        /// Description of the registry failure.
        reason: String,
    },
}

impl ProviderCheck {
    /// Whether a usable provider is configured.
    pub fn is_available(&self) -> bool {
        matches!(self, ProviderCheck::Available { .. })
    }

    /// The operator-facing warning for this outcome, if any.
    pub fn warning(&self) -> Option<String> {
        match self {
            ProviderCheck::Available { .. } => None,
            ProviderCheck::Incomplete { .. } => Some(
                "No embedding provider or model configured. Configure one in the AI settings \
                 before embeddings can be generated."
                    .to_string(),
            ),
            ProviderCheck::Unreachable { reason } => {
                Some(format!("Embedding provider registry is unavailable: {reason}"))
            }
        }
    }
}

/// Check that a default embedding provider is configured.
///
/// Advisory only: a missing provider or an unreachable registry produces a
/// warning through the messenger but never an error, so saving the field
/// configuration is never blocked. Embedding generation happens out-of-band
/// and may be configured later.
pub fn check_embedding_provider(
    registry: &dyn ProviderRegistry,
    messenger: &dyn Messenger,
) -> ProviderCheck {
    let check = match registry.default_provider(EMBEDDINGS_OPERATION) {
        Ok(defaults) if defaults.is_complete() => {
            let ProviderDefaults {
                provider_id,
                model_id,
            } = defaults;
            ProviderCheck::Available {
                provider_id: provider_id.unwrap_or_default(),
                model_id: model_id.unwrap_or_default(),
            }
        }
        Ok(defaults) => ProviderCheck::Incomplete {
            provider_id: defaults.provider_id,
            model_id: defaults.model_id,
        },
        Err(e) => ProviderCheck::Unreachable {
            reason: e.to_string(),
        },
    };

    match check.warning() {
        Some(message) => {
            warn!("{message}");
            messenger.warn(&message);
        }
        None => debug!("Embedding provider check passed"),
    }

    check
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryError;
    use std::cell::RefCell;

    struct FixedRegistry(std::result::Result<ProviderDefaults, String>);

    impl ProviderRegistry for FixedRegistry {
        fn default_provider(
            &self,
            operation_type: &str,
        ) -> std::result::Result<ProviderDefaults, RegistryError> {
            assert_eq!(operation_type, EMBEDDINGS_OPERATION);
            self.0.clone().map_err(RegistryError)
        }
    }

    #[derive(Default)]
    struct RecordingMessenger {
        warnings: RefCell<Vec<String>>,
    }

    impl Messenger for RecordingMessenger {
        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_available_provider_emits_no_warning() {
        let registry = FixedRegistry(Ok(ProviderDefaults::new("openai", "text-embedding-3-small")));
        let messenger = RecordingMessenger::default();

        let check = check_embedding_provider(&registry, &messenger);

        assert!(check.is_available());
        assert!(messenger.warnings.borrow().is_empty());
    }

    #[test]
    fn test_missing_model_warns() {
        let registry = FixedRegistry(Ok(ProviderDefaults {
            provider_id: Some("openai".to_string()),
            model_id: None,
        }));
        let messenger = RecordingMessenger::default();

        let check = check_embedding_provider(&registry, &messenger);

        assert!(matches!(check, ProviderCheck::Incomplete { .. }));
        assert_eq!(messenger.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_unreachable_registry_warns_but_does_not_fail() {
        let registry = FixedRegistry(Err("service not installed".to_string()));
        let messenger = RecordingMessenger::default();

        let check = check_embedding_provider(&registry, &messenger);

        assert!(matches!(check, ProviderCheck::Unreachable { .. }));
        let warnings = messenger.warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("service not installed"));
    }
}
