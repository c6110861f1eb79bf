use serde_json::{json, Value};

use crate::domain::llm::{
    extract_text, DispatchTarget, GenerationParams, Message, ProviderAdapter, ProviderRequest,
};
use crate::domain::{DomainError, ProviderName};

const DEFAULT_TOGETHER_URL: &str = "https://api.together.xyz/v1/completions";

/// Together AI text completions over a flattened `role: content` prompt
#[derive(Debug, Clone)]
pub struct TogetherAdapter {
    url: String,
}

impl Default for TogetherAdapter {
    fn default() -> Self {
        Self::with_url(DEFAULT_TOGETHER_URL)
    }
}

impl TogetherAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// One `role: content` line per message, joined with `\n`
pub fn flatten_prompt(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ProviderAdapter for TogetherAdapter {
    fn provider(&self) -> ProviderName {
        ProviderName::TogetherAi
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        let body = json!({
            "model": target.upstream_model(),
            "prompt": flatten_prompt(messages),
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        Ok(ProviderRequest::new(self.url.clone(), body).bearer(target.api_key()))
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        extract_text(ProviderName::TogetherAi, response, "/choices/0/text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelDescriptor, ResolvedCredential};

    #[test]
    fn test_flatten_prompt() {
        assert_eq!(
            flatten_prompt(&[Message::system("A"), Message::user("B")]),
            "system: A\nuser: B"
        );
    }

    #[test]
    fn test_request_keeps_nested_model_path() {
        let descriptor = ModelDescriptor::new(
            ProviderName::TogetherAi,
            "together_ai/meta-llama/Llama-3.1-70B-Instruct-hf",
            "TOGETHER_API_KEY",
        );
        let credential = ResolvedCredential::new("t-key");

        let request = TogetherAdapter::new()
            .build_request(
                &DispatchTarget::new(&descriptor, &credential),
                &[Message::system("A"), Message::user("B")],
                &GenerationParams::default(),
            )
            .unwrap();

        assert_eq!(request.body["model"], "meta-llama/Llama-3.1-70B-Instruct-hf");
        assert_eq!(request.body["prompt"], "system: A\nuser: B");
        assert!(request.body.get("messages").is_none());
    }

    #[test]
    fn test_extract_choice_text() {
        let adapter = TogetherAdapter::new();
        assert_eq!(
            adapter
                .extract_content(&json!({"choices": [{"text": "done"}]}))
                .unwrap(),
            "done"
        );
    }
}
