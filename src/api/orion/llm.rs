//! `POST /api/orion/llm`

use axum::extract::State;
use tracing::{error, info};

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, LlmRequestBody, LlmRequestMode, LlmResponseBody};

/// Serve one LLM request.
///
/// `RequireSession` is extracted before the body so an unauthenticated
/// caller gets 401 whatever the body contains.
pub async fn handle_llm_request(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(body): Json<LlmRequestBody>,
) -> Result<Json<LlmResponseBody>, ApiError> {
    let mut mode = body.into_mode()?;
    if let LlmRequestMode::Structured(request) = &mut mode {
        request.session_token = Some(session.token().to_string());
    }

    let outcome = match &mode {
        LlmRequestMode::Direct(request) => state.llm_service.handle_direct(request).await,
        LlmRequestMode::Structured(request) => state.llm_service.handle_structured(request).await,
    };

    match outcome {
        Ok(answer) => {
            info!(
                token_hint = %session.token_hint,
                model = %answer.model,
                "LLM request served"
            );
            Ok(Json(answer.into()))
        }
        Err(e) => {
            error!(error = %e, "LLM request failed");
            Err(ApiError::llm_failure(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::api::test_support::*;
    use crate::api::types::error::LLM_FAILURE_MESSAGE;
    use crate::domain::memory::{EnrichmentError, MemoryHit, MockMemorySearch};
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    const URI: &str = "/api/orion/llm";

    #[tokio::test]
    async fn test_missing_session_is_unauthorized_regardless_of_body() {
        let app = TestApp::new(MockHttpClient::new());

        for body in ["", "{not json", r#"{"prompt": "hi"}"#] {
            let (status, json) = send(app.router(), post_json(URI, None, body)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(json["success"], false);
        }

        let (status, _) = send(app.router(), post_json(URI, Some("wrong"), "{}")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(app.router(), post_json(URI, Some(SESSION), "{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(
            app.router(),
            post_json(URI, Some(SESSION), r#"{"requestType": "ASK_QUESTION"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Missing required parameters: requestType and primaryContext"
        );
        assert_eq!(app.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_direct_prompt_uses_default_model() {
        let app = TestApp::new(
            MockHttpClient::new().with_response(OPENROUTER_URL, chat_reply("Hello there")),
        );

        let (status, json) = send(
            app.router(),
            post_json(URI, Some(SESSION), r#"{"prompt": "Say hi"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["content"], "Hello there");
        assert_eq!(json["model"], DEEPSEEK_MODEL);
        assert!(json.get("memoryFiltersApplied").is_none());

        let call = app.client.last_call().unwrap();
        assert_eq!(call.body["messages"][0]["content"], "Say hi");
        assert_eq!(call.body["max_tokens"], 1000);
    }

    #[tokio::test]
    async fn test_missing_groq_key_names_model() {
        let app = TestApp::new(MockHttpClient::new());

        let (status, json) = send(
            app.router(),
            post_json(
                URI,
                Some(SESSION),
                r#"{"requestType": "JOURNAL_ENTRY", "primaryContext": "today", "model": "groq/llama3-70b-8192"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains(GROQ_MODEL));
        assert!(json["details"].is_string());
        assert_eq!(app.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_uses_generic_message() {
        let app = TestApp::new(MockHttpClient::new().with_status(GROQ_URL, 503, "overloaded"))
            .with_secret("GROQ_API_KEY", "gsk");

        let (status, json) = send(
            app.router(),
            post_json(URI, Some(SESSION), r#"{"prompt": "hi", "model": "groq/llama3-70b-8192"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], LLM_FAILURE_MESSAGE);
        assert!(json["details"].as_str().unwrap().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_enrichment_failure_still_succeeds() {
        let memory = Arc::new(MockMemorySearch::failing(EnrichmentError::Transport(
            "connection refused".to_string(),
        )));
        let app = TestApp::new(
            MockHttpClient::new().with_response(OPENROUTER_URL, chat_reply("Answer")),
        )
        .with_memory(memory.clone());

        let (status, json) = send(
            app.router(),
            post_json(
                URI,
                Some(SESSION),
                r#"{"requestType": "ASK_QUESTION", "primaryContext": "What did I do?", "memorySourceTypes": ["journal"]}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["content"], "Answer");
        assert_eq!(json["memoryFiltersApplied"], false);
        assert_eq!(memory.call_count(), 1);
    }

    #[tokio::test]
    async fn test_ask_question_reports_applied_filters() {
        let memory = Arc::new(MockMemorySearch::returning(vec![MemoryHit::new(
            "Shipped the gateway",
        )]));
        let app = TestApp::new(
            MockHttpClient::new().with_response(OPENROUTER_URL, chat_reply("You shipped it")),
        )
        .with_memory(memory.clone());

        let (status, json) = send(
            app.router(),
            post_json(
                URI,
                Some(SESSION),
                r#"{"requestType": "ASK_QUESTION", "primaryContext": "What did I ship?", "memorySourceTags": ["work"]}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["memoryFiltersApplied"], true);
        assert_eq!(
            memory.last_query().unwrap().auth_token.as_deref(),
            Some(SESSION)
        );

        let prompt = app.client.last_call().unwrap().body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(prompt.contains("Memory 1: Shipped the gateway"));
        assert!(prompt.ends_with("What did I ship?"));
    }

    #[tokio::test]
    async fn test_temperature_is_forwarded_unchanged() {
        let app = TestApp::new(
            MockHttpClient::new().with_response(OPENROUTER_URL, chat_reply("ok")),
        );

        let (status, _) = send(
            app.router(),
            post_json(URI, Some(SESSION), r#"{"prompt": "hi", "temperature": 0.3}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body = app.client.last_call().unwrap().body;
        assert_eq!(body["temperature"].to_string(), "0.3");
    }
}
