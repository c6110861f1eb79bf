//! Orion LLM gateway
//!
//! Routes Orion dashboard requests to hosted LLM providers:
//! - a static model registry mapping model ids to providers and key names
//! - per-request credential resolution from the environment
//! - provider adapters for Azure OpenAI, Groq, OpenRouter, Mistral, Gemini, Cohere and Together
//! - prompt assembly with best-effort memory enrichment for questions

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::model::default_registry;
use domain::{CredentialResolver, PromptAssembler};
use infrastructure::auth::StaticSessionVerifier;
use infrastructure::credentials::EnvSecretStore;
use infrastructure::llm::{HttpClient, HttpClientTrait, ProviderDispatcher};
use infrastructure::memory::HttpMemorySearch;
use infrastructure::services::{OrionLlmService, OrionLlmServiceConfig};
use tracing::{info, warn};

/// Wire the production state: environment secrets, the default registry,
/// reqwest-backed adapters and, when configured, the memory service.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = Arc::new(default_registry());
    let resolver = CredentialResolver::new(Arc::new(EnvSecretStore::new()));
    let client: Arc<dyn HttpClientTrait> = Arc::new(HttpClient::new());

    let available = registry.iter().filter(|d| resolver.is_available(d)).count();
    info!(
        models = registry.len(),
        with_keys = available,
        "Model registry loaded"
    );
    if available == 0 {
        warn!("No provider API keys found; every LLM request will fail");
    }

    let dispatcher = ProviderDispatcher::with_default_adapters(registry, resolver, client.clone());

    let mut service = OrionLlmService::new(
        Arc::new(dispatcher),
        PromptAssembler::new(config.llm.user_name.as_str()),
        OrionLlmServiceConfig {
            default_temperature: config.llm.default_temperature,
            default_max_tokens: config.llm.default_max_tokens,
            memory_limit: config.memory.limit,
            memory_collection: config.memory.collection_name.clone(),
        },
    );

    match config.memory.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(base_url) => {
            let search = HttpMemorySearch::new(client, base_url);
            info!(url = %search.url(), "Memory enrichment enabled");
            service = service.with_memory_search(Arc::new(search));
        }
        None => info!("Memory enrichment disabled (memory.base_url not set)"),
    }

    let verifier = StaticSessionVerifier::new(config.auth.session_tokens.iter().cloned());
    if verifier.is_empty() {
        warn!("No session tokens configured; all /api/orion requests will be rejected");
    }

    Ok(AppState::new(Arc::new(service), Arc::new(verifier)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = create_app_state_with_config(&AppConfig::default()).unwrap();

        assert_eq!(state.registry().len(), 19);
        assert!(state.session_verifier.verify("anything").is_none());
    }

    #[test]
    fn test_configured_session_tokens_are_accepted() {
        let mut config = AppConfig::default();
        config.auth.session_tokens = vec!["dash-token".to_string()];
        config.memory.base_url = Some("http://memory.local".to_string());

        let state = create_app_state_with_config(&config).unwrap();

        assert!(state.session_verifier.verify("dash-token").is_some());
    }
}
