use std::fmt::Debug;

use serde_json::Value;

use super::{GenerationParams, Message};
use crate::domain::credentials::ResolvedCredential;
use crate::domain::model::{ModelDescriptor, ProviderName};
use crate::domain::DomainError;

/// A fully-built outbound provider call
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl ProviderRequest {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer(self, api_key: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", api_key))
    }

    /// Header pairs borrowed in the shape the HTTP client expects
    pub fn header_refs(&self) -> Vec<(&str, &str)> {
        self.headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// Everything an adapter needs to address one model
#[derive(Debug, Clone, Copy)]
pub struct DispatchTarget<'a> {
    pub descriptor: &'a ModelDescriptor,
    pub credential: &'a ResolvedCredential,
}

impl<'a> DispatchTarget<'a> {
    pub fn new(descriptor: &'a ModelDescriptor, credential: &'a ResolvedCredential) -> Self {
        Self {
            descriptor,
            credential,
        }
    }

    pub fn model_id(&self) -> &'a str {
        &self.descriptor.model_id
    }

    /// Model name as the provider knows it (model id without the provider prefix)
    pub fn upstream_model(&self) -> &'a str {
        self.descriptor.upstream_model_name()
    }

    pub fn api_key(&self) -> &'a str {
        &self.credential.api_key
    }
}

/// Per-provider request shaping and response parsing.
///
/// Adapters are pure: they never perform I/O. The dispatcher owns the
/// HTTP call so adding a provider means adding one adapter.
pub trait ProviderAdapter: Send + Sync + Debug {
    fn provider(&self) -> ProviderName;

    fn build_request(
        &self,
        target: &DispatchTarget<'_>,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<ProviderRequest, DomainError>;

    fn extract_content(&self, response: &Value) -> Result<String, DomainError>;
}

/// Read a string at a JSON pointer, failing with `MalformedResponse` when
/// any segment is absent or the leaf is not a string.
pub fn extract_text(provider: ProviderName, response: &Value, pointer: &str) -> Result<String, DomainError> {
    response
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            DomainError::malformed_response(
                provider.as_str(),
                format!("missing text at '{}'", pointer),
            )
        })
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Adapter that posts to a fixed URL and reads `/text`
    #[derive(Debug)]
    pub struct MockProviderAdapter {
        provider: ProviderName,
        url: String,
    }

    impl MockProviderAdapter {
        pub fn new(provider: ProviderName, url: impl Into<String>) -> Self {
            Self {
                provider,
                url: url.into(),
            }
        }
    }

    impl ProviderAdapter for MockProviderAdapter {
        fn provider(&self) -> ProviderName {
            self.provider
        }

        fn build_request(
            &self,
            target: &DispatchTarget<'_>,
            messages: &[Message],
            params: &GenerationParams,
        ) -> Result<ProviderRequest, DomainError> {
            Ok(ProviderRequest::new(
                self.url.clone(),
                serde_json::json!({
                    "model": target.upstream_model(),
                    "messages": messages,
                    "temperature": params.temperature,
                    "max_tokens": params.max_tokens,
                }),
            )
            .bearer(target.api_key()))
        }

        fn extract_content(&self, response: &Value) -> Result<String, DomainError> {
            extract_text(self.provider, response, "/text")
        }
    }
}
