//! Immutable model registry

use super::{ModelDescriptor, ProviderName};

/// Provider-grouped table of model descriptors.
///
/// Built once at start-up and shared behind an `Arc`; nothing mutates it
/// afterwards. Groups keep the order in which providers were first registered.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    groups: Vec<(ProviderName, Vec<ModelDescriptor>)>,
}

impl ModelRegistry {
    pub fn new(descriptors: impl IntoIterator<Item = ModelDescriptor>) -> Self {
        let mut groups: Vec<(ProviderName, Vec<ModelDescriptor>)> = Vec::new();

        for descriptor in descriptors {
            match groups.iter_mut().find(|(p, _)| *p == descriptor.provider) {
                Some((_, models)) => models.push(descriptor),
                None => groups.push((descriptor.provider, vec![descriptor])),
            }
        }

        Self { groups }
    }

    /// Find the descriptor for a model id.
    ///
    /// - ids starting with `azure` are only matched against Azure models
    /// - `provider/...` ids are only matched against that provider's models
    /// - bare ids are matched against every provider in registration order
    pub fn lookup(&self, model_id: &str) -> Option<&ModelDescriptor> {
        if model_id.starts_with("azure") {
            return self.find_in(ProviderName::Azure, model_id);
        }

        if let Some((prefix, _)) = model_id.split_once('/') {
            let provider = prefix.parse::<ProviderName>().ok()?;
            return self.find_in(provider, model_id);
        }

        self.iter().find(|m| m.model_id == model_id)
    }

    pub fn models_for(&self, provider: ProviderName) -> &[ModelDescriptor] {
        self.groups
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, models)| models.as_slice())
            .unwrap_or(&[])
    }

    pub fn providers(&self) -> impl Iterator<Item = ProviderName> + '_ {
        self.groups.iter().map(|(p, _)| *p)
    }

    /// All descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.groups.iter().flat_map(|(_, models)| models.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, models)| models.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_in(&self, provider: ProviderName, model_id: &str) -> Option<&ModelDescriptor> {
        self.models_for(provider)
            .iter()
            .find(|m| m.model_id == model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ModelRegistry {
        ModelRegistry::new(vec![
            ModelDescriptor::new(ProviderName::Azure, "azure/gpt-4.1", "AZURE_OPENAI_API_KEY"),
            ModelDescriptor::new(ProviderName::Groq, "groq/llama3-70b-8192", "GROQ_API_KEY"),
            ModelDescriptor::new(ProviderName::Groq, "shared-name", "GROQ_API_KEY"),
            ModelDescriptor::new(ProviderName::Mistral, "shared-name", "MISTRAL_API_KEY"),
            ModelDescriptor::new(ProviderName::Azure, "azure/DeepSeek-R1", "AZURE_DEEPSEEK_API_KEY"),
        ])
    }

    #[test]
    fn test_groups_preserve_first_registration_order() {
        let registry = registry();
        let providers: Vec<_> = registry.providers().collect();

        assert_eq!(
            providers,
            vec![ProviderName::Azure, ProviderName::Groq, ProviderName::Mistral]
        );
        assert_eq!(registry.models_for(ProviderName::Azure).len(), 2);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_lookup_azure_prefix() {
        let registry = registry();
        let found = registry.lookup("azure/DeepSeek-R1").unwrap();
        assert_eq!(found.credential_ref, "AZURE_DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_lookup_provider_prefixed() {
        let registry = registry();
        assert!(registry.lookup("groq/llama3-70b-8192").is_some());
        assert!(registry.lookup("groq/not-registered").is_none());
    }

    #[test]
    fn test_lookup_unknown_provider_prefix_is_not_found() {
        let registry = registry();
        assert!(registry.lookup("anthropic/claude").is_none());
    }

    #[test]
    fn test_lookup_bare_name_returns_first_registered_match() {
        let registry = registry();
        let found = registry.lookup("shared-name").unwrap();
        assert_eq!(found.provider, ProviderName::Groq);
    }

    #[test]
    fn test_lookup_identity() {
        let registry = registry();
        for descriptor in registry.iter() {
            let found = registry.lookup(&descriptor.model_id).unwrap();
            assert_eq!(found.model_id, descriptor.model_id);
        }
    }
}
