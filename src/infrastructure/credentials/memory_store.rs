use std::collections::HashMap;

use crate::domain::SecretStore;

/// Fixed map of secrets, used for tests and for keys supplied by embedding code
#[derive(Debug, Clone, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, String>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for InMemorySecretStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            secrets: iter.into_iter().collect(),
        }
    }
}

impl SecretStore for InMemorySecretStore {
    fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_counts_as_absent() {
        let store = InMemorySecretStore::new()
            .with_secret("GROQ_API_KEY", "")
            .with_secret("GEMINI_API_KEY", "gem");

        assert!(store.get("GROQ_API_KEY").is_none());
        assert_eq!(store.get("GEMINI_API_KEY").as_deref(), Some("gem"));
        assert!(!store.contains("COHERE_API_KEY"));
    }

    #[test]
    fn test_from_iterator() {
        let store: InMemorySecretStore = vec![("A".to_string(), "1".to_string())]
            .into_iter()
            .collect();
        assert_eq!(store.get("A").as_deref(), Some("1"));
    }
}
