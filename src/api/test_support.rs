//! Router fixtures backed by mock upstreams

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::router::create_router_with_state;
use super::state::AppState;
use crate::domain::memory::MockMemorySearch;
use crate::domain::{CredentialResolver, ModelDescriptor, ModelRegistry, PromptAssembler, ProviderName};
use crate::infrastructure::auth::StaticSessionVerifier;
use crate::infrastructure::credentials::InMemorySecretStore;
use crate::infrastructure::llm::http_client::mock::MockHttpClient;
use crate::infrastructure::llm::{ChatCompletionsAdapter, OpenRouterAdapter, ProviderDispatcher};
use crate::infrastructure::services::{OrionLlmService, OrionLlmServiceConfig};

pub const SESSION: &str = "test-session";
pub const DEEPSEEK_MODEL: &str = "openrouter/deepseek/deepseek-chat-v3-0324:free";
pub const GROQ_MODEL: &str = "groq/llama3-70b-8192";
pub const OPENROUTER_URL: &str = "http://openrouter.test/chat/completions";
pub const GROQ_URL: &str = "http://groq.test/chat";

pub fn chat_reply(text: &str) -> Value {
    json!({"choices": [{"message": {"content": text}}]})
}

/// Builds an app whose upstreams are a shared `MockHttpClient`
pub struct TestApp {
    pub client: Arc<MockHttpClient>,
    secrets: InMemorySecretStore,
    memory: Option<Arc<MockMemorySearch>>,
}

impl TestApp {
    pub fn new(client: MockHttpClient) -> Self {
        Self {
            client: Arc::new(client),
            secrets: InMemorySecretStore::new().with_secret("OPEN_ROUTER_API_KEY", "or-key"),
            memory: None,
        }
    }

    pub fn with_secret(mut self, key: &str, value: &str) -> Self {
        self.secrets = self.secrets.with_secret(key, value);
        self
    }

    pub fn with_secrets(mut self, secrets: InMemorySecretStore) -> Self {
        self.secrets = secrets;
        self
    }

    pub fn with_memory(mut self, memory: Arc<MockMemorySearch>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn router(&self) -> Router {
        let registry = Arc::new(ModelRegistry::new(vec![
            ModelDescriptor::new(ProviderName::OpenRouter, DEEPSEEK_MODEL, "OPEN_ROUTER_API_KEY"),
            ModelDescriptor::new(ProviderName::Groq, GROQ_MODEL, "GROQ_API_KEY"),
        ]));
        let dispatcher = ProviderDispatcher::new(
            registry,
            CredentialResolver::new(Arc::new(self.secrets.clone())),
            self.client.clone(),
        )
        .with_adapter(Arc::new(OpenRouterAdapter::with_base_url("http://openrouter.test")))
        .with_adapter(Arc::new(ChatCompletionsAdapter::groq().with_url(GROQ_URL)));

        let mut service = OrionLlmService::new(
            Arc::new(dispatcher),
            PromptAssembler::default(),
            OrionLlmServiceConfig::default(),
        );
        if let Some(memory) = &self.memory {
            service = service.with_memory_search(memory.clone());
        }

        let state = AppState::new(
            Arc::new(service),
            Arc::new(StaticSessionVerifier::new([SESSION])),
        );
        create_router_with_state(state, None)
    }
}

pub fn post_json(uri: &str, session: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = session {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = session {
        builder = builder.header("x-session-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}
