use serde_json::{json, Value};

use crate::domain::llm::{
    extract_text, DispatchTarget, GenerationParams, Message, ProviderAdapter, ProviderRequest,
};
use crate::domain::{DomainError, ProviderName};

const DEFAULT_COHERE_CHAT_URL: &str = "https://api.cohere.ai/v1/chat";

/// Cohere chat. Every message goes into `chat_history`.
#[derive(Debug, Clone)]
pub struct CohereAdapter {
    url: String,
}

impl Default for CohereAdapter {
    fn default() -> Self {
        Self::with_url(DEFAULT_COHERE_CHAT_URL)
    }
}

impl CohereAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProviderAdapter for CohereAdapter {
    fn provider(&self) -> ProviderName {
        ProviderName::Cohere
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        let chat_history: Vec<Value> = messages
            .iter()
            .map(|m| json!({"role": m.role.as_str(), "message": m.content}))
            .collect();

        let body = json!({
            "model": target.upstream_model(),
            "chat_history": chat_history,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        Ok(ProviderRequest::new(self.url.clone(), body).bearer(target.api_key()))
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        extract_text(ProviderName::Cohere, response, "/text")
    }
}
