use serde_json::{json, Value};

use super::openai_compat::choice_content;
use crate::domain::llm::{DispatchTarget, GenerationParams, Message, ProviderAdapter, ProviderRequest};
use crate::domain::{DomainError, ProviderName};

const DEPLOYMENTS_SEGMENT: &str = "/openai/deployments/";

/// Azure OpenAI deployments, authenticated with the `api-key` header
#[derive(Debug, Clone, Default)]
pub struct AzureOpenAiAdapter {
    endpoint_override: Option<String>,
}

impl AzureOpenAiAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint_override: Some(endpoint.into()),
        }
    }

    fn build_url(&self, target: &DispatchTarget<'_>) -> Result<String, DomainError> {
        let model_id = target.model_id();
        let endpoint = self
            .endpoint_override
            .as_deref()
            .or(target.credential.endpoint.as_deref())
            .ok_or_else(|| {
                DomainError::configuration(format!("Azure endpoint not set for model {}", model_id))
            })?;
        let deployment = target.credential.deployment_id.as_deref().ok_or_else(|| {
            DomainError::configuration(format!("Azure deployment not set for model {}", model_id))
        })?;
        let api_version = target.credential.api_version.as_deref().ok_or_else(|| {
            DomainError::configuration(format!("Azure API version not set for model {}", model_id))
        })?;

        Ok(format!(
            "{}{}{}/chat/completions?api-version={}",
            base_endpoint(endpoint),
            DEPLOYMENTS_SEGMENT,
            deployment,
            api_version
        ))
    }
}

/// Resource root of an Azure endpoint, with trailing slashes and any
/// `/openai/deployments/...` suffix removed
fn base_endpoint(endpoint: &str) -> &str {
    let trimmed = endpoint.trim_end_matches('/');
    match trimmed.find(DEPLOYMENTS_SEGMENT) {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

impl ProviderAdapter for AzureOpenAiAdapter {
    fn provider(&self) -> ProviderName {
        ProviderName::Azure
    }

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError> {
        let body = json!({
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "stream": false,
        });

        Ok(ProviderRequest::new(self.build_url(target)?, body).header("api-key", target.api_key()))
    }

    fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
        choice_content(ProviderName::Azure, response)
    }
}
