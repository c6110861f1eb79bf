//! OpenAI-style chat completion adapters (Groq, Mistral)

use serde_json::{json, Value};

use crate::domain::llm::{extract_text, DispatchTarget, GenerationParams, Message, ProviderAdapter, ProviderRequest};
use crate::domain::{DomainError, ProviderName};

pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const MISTRAL_CHAT_URL: &str = "https://api.mistral.ai/v1/chat/completions";

const CHOICE_CONTENT: &str = "/choices/0/message/content";

/// `{model, messages, temperature, max_tokens}` body shared by OpenAI-style APIs
pub(super) fn chat_body(model: &str, messages: &[Message], params: &GenerationParams) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
    })
}

pub(super) fn choice_content(provider: ProviderName, response: &Value) -> Result<String, DomainError> {
    extract_text(provider, response, CHOICE_CONTENT)
}

/// Bearer-authenticated chat completions endpoint at a fixed URL
#[derive(Debug, Clone)]
pub struct ChatCompletionsAdapter {
    provider: ProviderName,
    url: String,
}

impl ChatCompletionsAdapter {
    pub fn new(provider: ProviderName, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
        }
    }

    pub fn groq() -> Self {
        Self::new(ProviderName::Groq, GROQ_CHAT_URL)
    }

    pub fn mistral() -> Self {
        Self::new(ProviderName::Mistral, MISTRAL_CHAT_URL)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl ProviderAdapter for ChatCompletionsAdapter {
    fn provider(&self) -> ProviderName {
        self.provider
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        Ok(
            ProviderRequest::new(self.url.clone(), chat_body(target.upstream_model(), messages, params))
                .bearer(target.api_key()),
        )
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        choice_content(self.provider, response)
    }
}
