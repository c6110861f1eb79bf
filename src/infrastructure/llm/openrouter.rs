use serde_json::Value;

use super::openai_compat::{chat_body, choice_content};
use crate::domain::llm::{DispatchTarget, GenerationParams, Message, ProviderAdapter, ProviderRequest};
use crate::domain::model::OPENROUTER_API_BASE;
use crate::domain::{DomainError, ProviderName};

const REFERER: &str = "https://orion.merislabs.com";
const TITLE: &str = "Orion AI System";

/// OpenRouter chat completions.
///
/// The base URL comes from the model's `api_base` unless overridden.
#[derive(Debug, Clone, Default)]
pub struct OpenRouterAdapter {
    base_url_override: Option<String>,
}

impl OpenRouterAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url_override: Some(base_url.into()),
        }
    }

    fn url(&self, target: &DispatchTarget<'_>) -> String {
        let base = self
            .base_url_override
            .as_deref()
            .or(target.credential.api_base.as_deref())
            .unwrap_or(OPENROUTER_API_BASE);

        format!("{}/chat/completions", base.trim_end_matches('/'))
    }
}

impl ProviderAdapter for OpenRouterAdapter {
    fn provider(&self) -> ProviderName {
        ProviderName::OpenRouter
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        Ok(
            ProviderRequest::new(self.url(target), chat_body(target.upstream_model(), messages, params))
                .bearer(target.api_key())
                .header("HTTP-Referer", REFERER)
                .header("X-Title", TITLE),
        )
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        choice_content(ProviderName::OpenRouter, response)
    }
}
