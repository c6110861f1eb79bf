use serde::Serialize;

use crate::domain::model::ProviderName;

/// Secret material and endpoint parameters resolved for one model
#[derive(Clone, PartialEq)]
pub struct ResolvedCredential {
    pub api_key: String,
    /// Azure resource endpoint, when the descriptor names one and it is set
    pub endpoint: Option<String>,
    pub deployment_id: Option<String>,
    pub api_version: Option<String>,
    pub api_base: Option<String>,
}

impl ResolvedCredential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: None,
            deployment_id: None,
            api_version: None,
            api_base: None,
        }
    }
}

// Keeps API keys out of logs and panic messages.
impl std::fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("deployment_id", &self.deployment_id)
            .field("api_version", &self.api_version)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Presence of the API key for one registered model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    pub model_id: String,
    pub provider: ProviderName,
    pub api_key_env: String,
    pub present: bool,
}
