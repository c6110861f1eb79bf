//! Request and response bodies of the `/api/orion/llm` endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CredentialStatus, ModelDescriptor, ProviderName, RequestType};
use crate::infrastructure::services::{DirectRequest, LlmAnswer, ProbeResult, StructuredRequest};

use super::error::ApiError;

pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Missing required parameters: requestType and primaryContext";

/// Body of `POST /api/orion/llm`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmRequestBody {
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default)]
    pub primary_context: Option<String>,
    #[serde(default)]
    pub profile_context: Option<String>,
    #[serde(default)]
    pub system_context: Option<String>,
    #[serde(default)]
    pub web_context: Option<String>,
    #[serde(default)]
    pub memory_source_types: Option<Vec<String>>,
    #[serde(default)]
    pub memory_source_tags: Option<Vec<String>>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Wins over `maxTokens` when a body carries both spellings
    #[serde(default, rename = "max_tokens")]
    pub max_tokens: Option<u32>,
    #[serde(default, rename = "maxTokens")]
    pub max_tokens_camel: Option<u32>,
}

/// The two ways a request body can be served
#[derive(Debug, Clone)]
pub enum LlmRequestMode {
    Direct(DirectRequest),
    Structured(StructuredRequest),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl LlmRequestBody {
    /// A non-empty `prompt` selects the direct path; otherwise `requestType`
    /// and `primaryContext` are both required.
    pub fn into_mode(self) -> Result<LlmRequestMode, ApiError> {
        let model = non_blank(self.model);
        let max_tokens = self.max_tokens.or(self.max_tokens_camel);

        if let Some(prompt) = non_blank(self.prompt) {
            return Ok(LlmRequestMode::Direct(DirectRequest {
                prompt,
                model,
                temperature: self.temperature,
                max_tokens,
            }));
        }

        let (Some(request_type), Some(primary_context)) = (
            non_blank(self.request_type),
            non_blank(self.primary_context),
        ) else {
            return Err(ApiError::bad_request(MISSING_PARAMETERS_MESSAGE));
        };

        let mut request = StructuredRequest::new(RequestType::from_name(&request_type), primary_context);
        request.profile_context = self.profile_context;
        request.system_context = self.system_context;
        request.web_context = self.web_context;
        request.memory_source_types = self.memory_source_types;
        request.memory_source_tags = self.memory_source_tags;
        request.model = model;
        request.temperature = self.temperature;
        request.max_tokens = max_tokens;

        Ok(LlmRequestMode::Structured(request))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponseBody {
    pub success: bool,
    pub content: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_filters_applied: Option<bool>,
}

impl From<LlmAnswer> for LlmResponseBody {
    fn from(answer: LlmAnswer) -> Self {
        Self {
            success: true,
            content: answer.content,
            model: answer.model,
            memory_filters_applied: answer.memory_filters_applied,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthProbeResponse {
    pub success: bool,
    pub results: Vec<ProbeResult>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    pub success: bool,
    pub keys: Vec<CredentialStatus>,
}

/// One registry entry as shown to the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: String,
    pub provider: ProviderName,
    pub api_key_env: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ModelSummary {
    pub fn new(descriptor: &ModelDescriptor, available: bool) -> Self {
        Self {
            id: descriptor.model_id.clone(),
            provider: descriptor.provider,
            api_key_env: descriptor.credential_ref.clone(),
            available,
            context_window: descriptor.context_window,
            max_output_tokens: descriptor.max_output_tokens,
            comment: descriptor.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<ModelSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn parse(json: &str) -> LlmRequestBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_prompt_selects_direct_path() {
        let body = parse(r#"{"prompt": "hello", "requestType": "ASK_QUESTION", "maxTokens": 50}"#);

        match body.into_mode().unwrap() {
            LlmRequestMode::Direct(direct) => {
                assert_eq!(direct.prompt, "hello");
                assert_eq!(direct.max_tokens, Some(50));
                assert!(direct.model.is_none());
            }
            other => panic!("expected direct mode, got {other:?}"),
        }
    }

    #[test]
    fn test_snake_case_max_tokens_accepted() {
        let body = parse(r#"{"prompt": "hello", "max_tokens": 64}"#);
        assert_eq!(body.max_tokens, Some(64));
    }

    #[test]
    fn test_both_max_tokens_spellings_prefer_snake_case() {
        let body = parse(r#"{"prompt": "hello", "max_tokens": 5, "maxTokens": 9}"#);

        match body.into_mode().unwrap() {
            LlmRequestMode::Direct(direct) => assert_eq!(direct.max_tokens, Some(5)),
            other => panic!("expected direct mode, got {other:?}"),
        }

        let body = parse(r#"{"requestType": "ASK_QUESTION", "primaryContext": "q", "maxTokens": 9}"#);
        match body.into_mode().unwrap() {
            LlmRequestMode::Structured(request) => assert_eq!(request.max_tokens, Some(9)),
            other => panic!("expected structured mode, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_prompt_falls_through_to_structured() {
        let body = parse(
            r#"{"prompt": "  ", "requestType": "ask_question", "primaryContext": "why?",
                "memorySourceTags": ["journal"]}"#,
        );

        match body.into_mode().unwrap() {
            LlmRequestMode::Structured(request) => {
                assert_eq!(request.request_type, RequestType::AskQuestion);
                assert_eq!(request.primary_context, "why?");
                assert_eq!(request.memory_source_tags, Some(vec!["journal".to_string()]));
            }
            other => panic!("expected structured mode, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        for json in [
            r#"{}"#,
            r#"{"requestType": "ASK_QUESTION"}"#,
            r#"{"primaryContext": "ctx"}"#,
            r#"{"requestType": "", "primaryContext": "ctx"}"#,
        ] {
            let err = parse(json).into_mode().unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.response.error, MISSING_PARAMETERS_MESSAGE);
        }
    }

    #[test]
    fn test_response_omits_unset_filter_flag() {
        let body = LlmResponseBody::from(LlmAnswer {
            content: "hi".to_string(),
            model: "groq/llama3-70b-8192".to_string(),
            memory_filters_applied: None,
        });
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert!(json.get("memoryFiltersApplied").is_none());
    }
}
