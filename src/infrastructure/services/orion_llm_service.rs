//! Orion LLM service - direct and structured request handling

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::llm::{GenerationParams, Message, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::domain::memory::{
    EnrichmentContext, EnrichmentError, MemoryFilter, MemoryQuery, MemorySearch,
};
use crate::domain::prompt::{PromptAssembler, PromptInput, RequestType};
use crate::domain::{DomainError, ProviderName};
use crate::infrastructure::llm::ProviderDispatcher;
use crate::infrastructure::observability::record_memory_search;

const HEALTH_PROMPT: &str = "Say hello.";
const HEALTH_TEMPERATURE: f64 = 0.2;
const HEALTH_MAX_TOKENS: u32 = 32;

/// Defaults applied when a request leaves a value out
#[derive(Debug, Clone, PartialEq)]
pub struct OrionLlmServiceConfig {
    pub default_temperature: f64,
    pub default_max_tokens: u32,
    pub memory_limit: u32,
    pub memory_collection: String,
}

impl Default for OrionLlmServiceConfig {
    fn default() -> Self {
        Self {
            default_temperature: DEFAULT_TEMPERATURE,
            default_max_tokens: DEFAULT_MAX_TOKENS,
            memory_limit: 5,
            memory_collection: "orion_memory".to_string(),
        }
    }
}

/// Raw prompt sent as a single user message
#[derive(Debug, Clone, Default)]
pub struct DirectRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Request built from a request type and context pieces
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub request_type: RequestType,
    pub primary_context: String,
    pub profile_context: Option<String>,
    pub system_context: Option<String>,
    pub web_context: Option<String>,
    pub memory_source_types: Option<Vec<String>>,
    pub memory_source_tags: Option<Vec<String>>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// Caller's session token, forwarded to the memory service
    pub session_token: Option<String>,
}

impl StructuredRequest {
    pub fn new(request_type: RequestType, primary_context: impl Into<String>) -> Self {
        Self {
            request_type,
            primary_context: primary_context.into(),
            profile_context: None,
            system_context: None,
            web_context: None,
            memory_source_types: None,
            memory_source_tags: None,
            model: None,
            temperature: None,
            max_tokens: None,
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn memory_filter(&self) -> Option<MemoryFilter> {
        MemoryFilter::from_lists(
            self.memory_source_types.clone(),
            self.memory_source_tags.clone(),
        )
    }
}

/// Successful answer from either path
#[derive(Debug, Clone, PartialEq)]
pub struct LlmAnswer {
    pub content: String,
    pub model: String,
    /// Set only for ASK_QUESTION requests
    pub memory_filters_applied: Option<bool>,
}

/// Outcome of probing one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub model: String,
    pub provider: String,
    pub status: ProbeStatus,
    pub content: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Success,
    Fail,
}

/// Orchestrates memory enrichment, prompt assembly and dispatch
#[derive(Debug, Clone)]
pub struct OrionLlmService {
    dispatcher: Arc<ProviderDispatcher>,
    assembler: PromptAssembler,
    memory: Option<Arc<dyn MemorySearch>>,
    config: OrionLlmServiceConfig,
}

impl OrionLlmService {
    pub fn new(
        dispatcher: Arc<ProviderDispatcher>,
        assembler: PromptAssembler,
        config: OrionLlmServiceConfig,
    ) -> Self {
        Self {
            dispatcher,
            assembler,
            memory: None,
            config,
        }
    }

    pub fn with_memory_search(mut self, memory: Arc<dyn MemorySearch>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn dispatcher(&self) -> &Arc<ProviderDispatcher> {
        &self.dispatcher
    }

    pub fn config(&self) -> &OrionLlmServiceConfig {
        &self.config
    }

    fn params(&self, temperature: Option<f64>, max_tokens: Option<u32>) -> GenerationParams {
        GenerationParams::new(
            temperature.unwrap_or(self.config.default_temperature),
            max_tokens.unwrap_or(self.config.default_max_tokens),
        )
    }

    /// Send the raw prompt without enrichment or assembly
    pub async fn handle_direct(&self, request: &DirectRequest) -> Result<LlmAnswer, DomainError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| RequestType::AskQuestion.default_model().to_string());
        let params = self.params(request.temperature, request.max_tokens);

        debug!(model = %model, "Handling direct prompt");

        let content = self
            .dispatcher
            .try_dispatch(&model, &[Message::user(request.prompt.as_str())], &params)
            .await?;

        Ok(LlmAnswer {
            content,
            model,
            memory_filters_applied: None,
        })
    }

    pub async fn handle_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<LlmAnswer, DomainError> {
        let ask_question = request.request_type.is_ask_question();
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| request.request_type.default_model().to_string());

        let enrichment = if ask_question {
            match self.enrich(request).await {
                Ok(context) => context,
                Err(e) => {
                    warn!(error = %e, "Memory enrichment failed; continuing without memories");
                    EnrichmentContext::empty()
                }
            }
        } else {
            EnrichmentContext::empty()
        };

        let input = PromptInput::new(&request.request_type, &request.primary_context)
            .with_profile_context(request.profile_context.as_deref())
            .with_system_context(request.system_context.as_deref())
            .with_memories(&enrichment.memories)
            .with_web_context(request.web_context.as_deref());
        let messages = self.assembler.assemble(&input);
        let params = self.params(request.temperature, request.max_tokens);

        info!(
            request_type = %request.request_type,
            model = %model,
            memories = enrichment.memories.len(),
            "Handling structured request"
        );

        let content = self.dispatcher.try_dispatch(&model, &messages, &params).await?;

        Ok(LlmAnswer {
            content,
            model,
            memory_filters_applied: ask_question.then_some(enrichment.filters_applied),
        })
    }

    /// Search memories for the request's primary context.
    ///
    /// With no memory search configured this yields an empty context.
    pub async fn enrich(
        &self,
        request: &StructuredRequest,
    ) -> Result<EnrichmentContext, EnrichmentError> {
        let Some(memory) = &self.memory else {
            return Ok(EnrichmentContext::empty());
        };

        let filter = request.memory_filter();
        let has_filter = filter.is_some();
        let query = MemoryQuery::new(
            request.primary_context.as_str(),
            self.config.memory_limit,
            self.config.memory_collection.as_str(),
        )
        .with_filter(filter)
        .with_auth_token(request.session_token.clone());

        let outcome = memory.search(&query).await;
        record_memory_search(
            outcome.is_ok(),
            outcome.as_ref().map(Vec::len).unwrap_or(0),
        );

        Ok(EnrichmentContext::new(outcome?, has_filter))
    }

    /// Probe each model with a short fixed prompt, one after another
    pub async fn health_probe(&self, models: &[&str]) -> Vec<ProbeResult> {
        let params = GenerationParams::new(HEALTH_TEMPERATURE, HEALTH_MAX_TOKENS);
        let messages = [Message::user(HEALTH_PROMPT)];
        let mut results = Vec::with_capacity(models.len());

        for model in models {
            let provider = self.provider_label(model);
            let result = match self.dispatcher.try_dispatch(model, &messages, &params).await {
                Ok(content) => ProbeResult {
                    model: model.to_string(),
                    provider,
                    status: ProbeStatus::Success,
                    content: Some(content),
                    error: None,
                },
                Err(e) => ProbeResult {
                    model: model.to_string(),
                    provider,
                    status: ProbeStatus::Fail,
                    content: None,
                    error: Some(e.to_string()),
                },
            };
            results.push(result);
        }

        results
    }

    fn provider_label(&self, model_id: &str) -> String {
        match self.dispatcher.registry().lookup(model_id) {
            Some(descriptor) => descriptor.provider.to_string(),
            None => model_id
                .split_once('/')
                .map(|(prefix, _)| prefix)
                .unwrap_or(ProviderName::Azure.as_str())
                .to_string(),
        }
    }
}
