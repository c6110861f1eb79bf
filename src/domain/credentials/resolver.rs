//! Resolution of model credentials from a secret store

use std::sync::Arc;

use tracing::debug;

use super::{CredentialStatus, ResolvedCredential, SecretStore};
use crate::domain::model::{ModelDescriptor, ModelRegistry, ProviderName};
use crate::domain::DomainError;

/// Looks up the API key and endpoint parameters a descriptor points at
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    store: Arc<dyn SecretStore>,
}

impl CredentialResolver {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self { store }
    }

    /// Resolve the credential for a descriptor.
    ///
    /// A missing key is reported as `DomainError::Credential` naming the model
    /// id. A missing Azure endpoint is not an error here; it stays `None`.
    pub fn resolve(&self, descriptor: &ModelDescriptor) -> Result<ResolvedCredential, DomainError> {
        let api_key = self
            .store
            .get(&descriptor.credential_ref)
            .ok_or_else(|| DomainError::credential_missing(&descriptor.model_id))?;

        let endpoint = match (&descriptor.provider, &descriptor.endpoint_ref) {
            (ProviderName::Azure, Some(endpoint_ref)) => self.store.get(endpoint_ref),
            _ => None,
        };

        debug!(
            model = %descriptor.model_id,
            store = self.store.store_name(),
            has_endpoint = endpoint.is_some(),
            "Resolved credential"
        );

        Ok(ResolvedCredential {
            api_key,
            endpoint,
            deployment_id: descriptor.deployment_id.clone(),
            api_version: descriptor.api_version.clone(),
            api_base: descriptor.api_base.clone(),
        })
    }

    pub fn is_available(&self, descriptor: &ModelDescriptor) -> bool {
        self.store.contains(&descriptor.credential_ref)
    }

    /// Key presence for every model in the registry
    pub fn report(&self, registry: &ModelRegistry) -> Vec<CredentialStatus> {
        registry
            .iter()
            .map(|descriptor| CredentialStatus {
                model_id: descriptor.model_id.clone(),
                provider: descriptor.provider,
                api_key_env: descriptor.credential_ref.clone(),
                present: self.is_available(descriptor),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::credentials::InMemorySecretStore;

    fn azure_descriptor() -> ModelDescriptor {
        ModelDescriptor::new(ProviderName::Azure, "azure/gpt-4.1", "AZURE_OPENAI_API_KEY")
            .with_azure_deployment("AZURE_OPENAI_ENDPOINT", "gpt-4.1", "2025-01-01-preview")
    }

    #[test]
    fn test_resolve_present_key() {
        let store = InMemorySecretStore::new().with_secret("GROQ_API_KEY", "gsk-1");
        let resolver = CredentialResolver::new(Arc::new(store));
        let descriptor =
            ModelDescriptor::new(ProviderName::Groq, "groq/llama3-70b-8192", "GROQ_API_KEY");

        let credential = resolver.resolve(&descriptor).unwrap();
        assert_eq!(credential.api_key, "gsk-1");
        assert!(credential.endpoint.is_none());
    }

    #[test]
    fn test_resolve_missing_key_names_model() {
        let resolver = CredentialResolver::new(Arc::new(InMemorySecretStore::new()));
        let descriptor =
            ModelDescriptor::new(ProviderName::Groq, "groq/llama3-70b-8192", "GROQ_API_KEY");

        let err = resolver.resolve(&descriptor).unwrap_err();
        assert!(err.is_credential_missing());
        assert_eq!(
            err.to_string(),
            "API key not found for model groq/llama3-70b-8192"
        );
    }

    #[test]
    fn test_resolve_azure_endpoint_and_deployment() {
        let store = InMemorySecretStore::new()
            .with_secret("AZURE_OPENAI_API_KEY", "az-key")
            .with_secret("AZURE_OPENAI_ENDPOINT", "https://orion.openai.azure.com");
        let resolver = CredentialResolver::new(Arc::new(store));

        let credential = resolver.resolve(&azure_descriptor()).unwrap();
        assert_eq!(
            credential.endpoint.as_deref(),
            Some("https://orion.openai.azure.com")
        );
        assert_eq!(credential.deployment_id.as_deref(), Some("gpt-4.1"));
        assert_eq!(credential.api_version.as_deref(), Some("2025-01-01-preview"));
    }

    #[test]
    fn test_resolve_azure_without_endpoint_is_not_an_error() {
        let store = InMemorySecretStore::new().with_secret("AZURE_OPENAI_API_KEY", "az-key");
        let resolver = CredentialResolver::new(Arc::new(store));

        let credential = resolver.resolve(&azure_descriptor()).unwrap();
        assert!(credential.endpoint.is_none());
    }

    #[test]
    fn test_endpoint_ignored_for_non_azure() {
        let store = InMemorySecretStore::new()
            .with_secret("GROQ_API_KEY", "gsk-1")
            .with_secret("SOME_ENDPOINT", "https://example.test");
        let resolver = CredentialResolver::new(Arc::new(store));

        let mut descriptor =
            ModelDescriptor::new(ProviderName::Groq, "groq/gemma2-9b-it", "GROQ_API_KEY");
        descriptor.endpoint_ref = Some("SOME_ENDPOINT".to_string());

        assert!(resolver.resolve(&descriptor).unwrap().endpoint.is_none());
    }

    #[test]
    fn test_report_lists_every_model() {
        let store = InMemorySecretStore::new().with_secret("GROQ_API_KEY", "gsk-1");
        let resolver = CredentialResolver::new(Arc::new(store));
        let registry = ModelRegistry::new(vec![
            ModelDescriptor::new(ProviderName::Groq, "groq/gemma2-9b-it", "GROQ_API_KEY"),
            ModelDescriptor::new(ProviderName::Cohere, "cohere/command-r-plus", "COHERE_API_KEY"),
        ]);

        let report = resolver.report(&registry);
        assert_eq!(report.len(), 2);
        assert!(report[0].present);
        assert!(!report[1].present);
        assert_eq!(report[1].api_key_env, "COHERE_API_KEY");
    }
}
