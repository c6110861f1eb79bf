use thiserror::Error;

/// Core domain errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A model was found but its API key is not configured
    #[error("{message}")]
    Credential { model_id: String, message: String },

    /// Transport-level failure talking to a provider
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    /// Provider answered with a non-2xx status
    #[error("API request failed with status {status}: {body}")]
    ProviderHttp { status: u16, body: String },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("{message}")]
    Unimplemented { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The model id is not present in the registry
    pub fn model_not_found(model_id: &str) -> Self {
        Self::not_found(format!("model not found: {}", model_id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn credential_missing(model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();

        Self::Credential {
            message: format!("API key not found for model {}", model_id),
            model_id,
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn provider_http(status: u16, body: impl Into<String>) -> Self {
        Self::ProviderHttp {
            status,
            body: body.into(),
        }
    }

    pub fn malformed_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn unimplemented_provider(provider: &str) -> Self {
        Self::Unimplemented {
            message: format!("Provider {} not implemented", provider),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the failure is a missing API key
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, Self::Credential { .. })
    }
}
