//! Model-id based dispatch to provider adapters

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::http_client::HttpClientTrait;
use super::{
    AzureOpenAiAdapter, ChatCompletionsAdapter, CohereAdapter, GeminiAdapter, OpenRouterAdapter,
    TogetherAdapter,
};
use crate::domain::llm::{DispatchTarget, GenerationParams, LlmResult, Message, ProviderAdapter};
use crate::domain::{CredentialResolver, DomainError, ModelRegistry, ProviderName};
use crate::infrastructure::observability::{record_llm_request, LlmRequestMetricParams};

/// Routes a model id to its provider and performs exactly one HTTP call.
///
/// Shared state is read-only: the registry, the resolver's secret store, the
/// adapter map and the HTTP client are all behind `Arc`s and never mutated.
#[derive(Debug, Clone)]
pub struct ProviderDispatcher {
    registry: Arc<ModelRegistry>,
    resolver: CredentialResolver,
    adapters: HashMap<ProviderName, Arc<dyn ProviderAdapter>>,
    client: Arc<dyn HttpClientTrait>,
}

impl ProviderDispatcher {
    /// Dispatcher with no adapters registered
    pub fn new(
        registry: Arc<ModelRegistry>,
        resolver: CredentialResolver,
        client: Arc<dyn HttpClientTrait>,
    ) -> Self {
        Self {
            registry,
            resolver,
            adapters: HashMap::new(),
            client,
        }
    }

    /// Dispatcher with the production adapter for every supported provider
    pub fn with_default_adapters(
        registry: Arc<ModelRegistry>,
        resolver: CredentialResolver,
        client: Arc<dyn HttpClientTrait>,
    ) -> Self {
        Self::new(registry, resolver, client)
            .with_adapter(Arc::new(AzureOpenAiAdapter::new()))
            .with_adapter(Arc::new(ChatCompletionsAdapter::groq()))
            .with_adapter(Arc::new(OpenRouterAdapter::new()))
            .with_adapter(Arc::new(ChatCompletionsAdapter::mistral()))
            .with_adapter(Arc::new(GeminiAdapter::new()))
            .with_adapter(Arc::new(CohereAdapter::new()))
            .with_adapter(Arc::new(TogetherAdapter::new()))
    }

    /// Register an adapter, replacing any previous one for the same provider
    pub fn with_adapter(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(adapter.provider(), adapter);
        self
    }

    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    pub fn resolver(&self) -> &CredentialResolver {
        &self.resolver
    }

    /// Dispatch and fold the outcome into an `LlmResult`; never fails
    pub async fn dispatch(
        &self,
        model_id: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> LlmResult {
        LlmResult::from_outcome(model_id, self.try_dispatch(model_id, messages, params).await)
    }

    /// Dispatch one request and return the extracted text.
    ///
    /// Lookup and credential failures return before any HTTP call is made.
    pub async fn try_dispatch(
        &self,
        model_id: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, DomainError> {
        let descriptor = self
            .registry
            .lookup(model_id)
            .ok_or_else(|| DomainError::model_not_found(model_id))?;

        let credential = self.resolver.resolve(descriptor).inspect_err(|_| {
            warn!(model = %model_id, "API key not configured");
        })?;

        let provider = descriptor.provider;
        let adapter = self
            .adapters
            .get(&provider)
            .ok_or_else(|| DomainError::unimplemented_provider(provider.as_str()))?;

        let target = DispatchTarget::new(descriptor, &credential);
        let request = adapter.build_request(&target, messages, params)?;

        debug!(
            model = %model_id,
            provider = %provider,
            url = %request.url,
            message_count = messages.len(),
            "Dispatching LLM request"
        );

        let start = Instant::now();
        let outcome = self
            .client
            .post_json(&request.url, request.header_refs(), &request.body)
            .await
            .and_then(|response| adapter.extract_content(&response));
        let duration = start.elapsed();

        record_llm_request(LlmRequestMetricParams {
            provider: provider.as_str(),
            model: model_id,
            duration,
            success: outcome.is_ok(),
        });

        match &outcome {
            Ok(content) => info!(
                model = %model_id,
                provider = %provider,
                duration_ms = duration.as_millis() as u64,
                content_len = content.len(),
                "LLM request completed"
            ),
            Err(e) => warn!(
                model = %model_id,
                provider = %provider,
                duration_ms = duration.as_millis() as u64,
                error = %e,
                "LLM request failed"
            ),
        }

        outcome
    }
}
