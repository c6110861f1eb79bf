use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::llm::{
    extract_text, DispatchTarget, GenerationParams, Message, MessageRole, ProviderAdapter,
    ProviderRequest,
};
use crate::domain::{DomainError, ProviderName};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini `generateContent`
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    base_url: String,
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_GEMINI_BASE_URL)
    }
}

impl GeminiAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: [GeminiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

impl<'a> GeminiContent<'a> {
    // Gemini has no system role; system text is sent as a user turn.
    fn from_message(message: &'a Message) -> Self {
        let role = match message.role {
            MessageRole::System | MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role,
            parts: [GeminiPart {
                text: &message.content,
            }],
        }
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn provider(&self) -> ProviderName {
        ProviderName::Gemini
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            target.upstream_model()
        );
        let contents: Vec<GeminiContent<'_>> =
            messages.iter().map(GeminiContent::from_message).collect();

        let body = json!({
            "contents": contents,
            "generationConfig": {
                "temperature": params.temperature,
                "maxOutputTokens": params.max_tokens,
            }
        });

        Ok(ProviderRequest::new(url, body).header("x-goog-api-key", target.api_key()))
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        extract_text(ProviderName::Gemini, response, "/candidates/0/content/parts/0/text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelDescriptor, ResolvedCredential};

    fn build(messages: &[Message]) -> ProviderRequest {
        let descriptor = ModelDescriptor::new(
            ProviderName::Gemini,
            "gemini/gemini-1.5-pro-latest",
            "GEMINI_API_KEY",
        );
        let credential = ResolvedCredential::new("g-key");

        GeminiAdapter::new()
            .build_request(
                &DispatchTarget::new(&descriptor, &credential),
                messages,
                &GenerationParams::new(0.5, 500),
            )
            .unwrap()
    }

    #[test]
    fn test_system_role_is_coerced_to_user_in_order() {
        let request = build(&[Message::system("A"), Message::user("B")]);

        assert_eq!(
            request.body["contents"],
            json!([
                {"role": "user", "parts": [{"text": "A"}]},
                {"role": "user", "parts": [{"text": "B"}]}
            ])
        );
    }

    #[test]
    fn test_url_header_and_generation_config() {
        let request = build(&[Message::user("hi")]);

        assert_eq!(
            request.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro-latest:generateContent"
        );
        assert_eq!(request.header_refs(), vec![("x-goog-api-key", "g-key")]);
        assert_eq!(request.body["generationConfig"]["maxOutputTokens"], 500);
    }

    #[test]
    fn test_extract_candidate_text() {
        let adapter = GeminiAdapter::new();
        let response = json!({
            "candidates": [{"content": {"parts": [{"text": "Hello from Gemini"}]}}]
        });
        assert_eq!(adapter.extract_content(&response).unwrap(), "Hello from Gemini");
        assert!(adapter.extract_content(&json!({"candidates": []})).is_err());
    }
}
