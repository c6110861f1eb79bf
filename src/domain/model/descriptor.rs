//! Model descriptor and provider name types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported LLM providers, keyed by the prefix used in model ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderName {
    Azure,
    Groq,
    #[serde(rename = "openrouter")]
    OpenRouter,
    Mistral,
    Gemini,
    Cohere,
    #[serde(rename = "together_ai")]
    TogetherAi,
}

impl ProviderName {
    pub const ALL: [ProviderName; 7] = [
        ProviderName::Azure,
        ProviderName::Groq,
        ProviderName::OpenRouter,
        ProviderName::Mistral,
        ProviderName::Gemini,
        ProviderName::Cohere,
        ProviderName::TogetherAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Azure => "azure",
            ProviderName::Groq => "groq",
            ProviderName::OpenRouter => "openrouter",
            ProviderName::Mistral => "mistral",
            ProviderName::Gemini => "gemini",
            ProviderName::Cohere => "cohere",
            ProviderName::TogetherAi => "together_ai",
        }
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for provider keys that are not in the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderName {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

/// Static metadata for one addressable model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub model_id: String,
    pub provider: ProviderName,
    /// Name of the secret holding the API key
    pub credential_ref: String,
    /// Name of the secret holding the Azure resource endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Base URL override (OpenRouter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_cost_per_token: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_cost_per_token: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ModelDescriptor {
    pub fn new(
        provider: ProviderName,
        model_id: impl Into<String>,
        credential_ref: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            provider,
            credential_ref: credential_ref.into(),
            endpoint_ref: None,
            deployment_id: None,
            api_version: None,
            api_base: None,
            context_window: None,
            max_output_tokens: None,
            input_cost_per_token: None,
            output_cost_per_token: None,
            comment: None,
        }
    }

    /// Azure deployment: endpoint secret, deployment id and API version
    pub fn with_azure_deployment(
        mut self,
        endpoint_ref: impl Into<String>,
        deployment_id: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        self.endpoint_ref = Some(endpoint_ref.into());
        self.deployment_id = Some(deployment_id.into());
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_limits(mut self, context_window: u32, max_output_tokens: u32) -> Self {
        self.context_window = Some(context_window);
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn with_costs(mut self, input_per_token: f64, output_per_token: f64) -> Self {
        self.input_cost_per_token = Some(input_per_token);
        self.output_cost_per_token = Some(output_per_token);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Model id with everything up to and including the first `/` removed.
    ///
    /// `openrouter/deepseek/deepseek-chat-v3-0324:free` becomes
    /// `deepseek/deepseek-chat-v3-0324:free`; bare ids are returned as-is.
    pub fn upstream_model_name(&self) -> &str {
        self.model_id
            .split_once('/')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.model_id)
    }
}
