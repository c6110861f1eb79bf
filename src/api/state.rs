//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::{CredentialResolver, ModelRegistry};
use crate::infrastructure::auth::SessionVerifier;
use crate::infrastructure::services::OrionLlmService;

/// Read-only state cloned into every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub llm_service: Arc<OrionLlmService>,
    pub session_verifier: Arc<dyn SessionVerifier>,
}

impl AppState {
    pub fn new(llm_service: Arc<OrionLlmService>, session_verifier: Arc<dyn SessionVerifier>) -> Self {
        Self {
            llm_service,
            session_verifier,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        self.llm_service.dispatcher().registry()
    }

    pub fn resolver(&self) -> &CredentialResolver {
        self.llm_service.dispatcher().resolver()
    }
}
