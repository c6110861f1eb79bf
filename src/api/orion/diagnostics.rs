//! Session-gated diagnostics under `/api/orion/llm`

use axum::extract::State;
use chrono::Utc;

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{HealthProbeResponse, Json, KeysResponse, ModelSummary, ModelsResponse};
use crate::domain::model::health_probe_models;

/// Probe the primary Azure model and its fallbacks, one after another
pub async fn llm_health(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Json<HealthProbeResponse> {
    let models = health_probe_models();
    let results = state.llm_service.health_probe(&models).await;

    Json(HealthProbeResponse {
        success: true,
        results,
        timestamp: Utc::now(),
    })
}

/// Which API keys are present, never their values
pub async fn llm_keys(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Json<KeysResponse> {
    Json(KeysResponse {
        success: true,
        keys: state.resolver().report(state.registry()),
    })
}

pub async fn llm_models(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Json<ModelsResponse> {
    let resolver = state.resolver();
    let models = state
        .registry()
        .iter()
        .map(|descriptor| ModelSummary::new(descriptor, resolver.is_available(descriptor)))
        .collect();

    Json(ModelsResponse {
        success: true,
        models,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api::test_support::*;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    #[tokio::test]
    async fn test_diagnostics_require_session() {
        let app = TestApp::new(MockHttpClient::new());

        for uri in ["/api/orion/llm/health", "/api/orion/llm/keys", "/api/orion/llm/models"] {
            let (status, _) = send(app.router(), get(uri, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        }
        assert_eq!(app.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_keys_report_presence_only() {
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(app.router(), get("/api/orion/llm/keys", Some(SESSION))).await;

        assert_eq!(status, StatusCode::OK);
        let keys = json["keys"].as_array().unwrap();
        assert_eq!(keys.len(), 2);

        let groq = keys.iter().find(|k| k["modelId"] == GROQ_MODEL).unwrap();
        assert_eq!(groq["apiKeyEnv"], "GROQ_API_KEY");
        assert_eq!(groq["present"], false);
        assert!(!json.to_string().contains("or-key"));
    }

    #[tokio::test]
    async fn test_models_listing_marks_availability() {
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(app.router(), get("/api/orion/llm/models", Some(SESSION))).await;

        assert_eq!(status, StatusCode::OK);
        let models = json["models"].as_array().unwrap();
        let deepseek = models.iter().find(|m| m["id"] == DEEPSEEK_MODEL).unwrap();
        assert_eq!(deepseek["provider"], "openrouter");
        assert_eq!(deepseek["available"], true);
    }

    #[tokio::test]
    async fn test_health_probe_reports_failures() {
        // Only the DeepSeek fallback is registered with a key, and its upstream has no reply
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(app.router(), get("/api/orion/llm/health", Some(SESSION))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert!(json["timestamp"].is_string());

        let results = json["results"].as_array().unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0]["model"], "azure/gpt-4.1");
        assert!(results.iter().all(|r| r["status"] == "fail"));
        assert_eq!(app.client.call_count(), 1);
    }
}
