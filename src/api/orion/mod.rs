//! Orion dashboard endpoints

mod diagnostics;
mod llm;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub use diagnostics::{llm_health, llm_keys, llm_models};
pub use llm::handle_llm_request;

/// Routes mounted under `/api/orion`
pub fn create_orion_router() -> Router<AppState> {
    Router::new()
        .route("/llm", post(handle_llm_request))
        .route("/llm/health", get(llm_health))
        .route("/llm/keys", get(llm_keys))
        .route("/llm/models", get(llm_models))
}
