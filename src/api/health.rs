//! Liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Always 200 while the process is serving
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness is degraded, but still 200, when no model can be dispatched
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let checks = vec![check_registry(&state), check_credentials(&state)];

    let status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
    };

    (status_code, Json(response))
}

fn check_registry(state: &AppState) -> HealthCheck {
    let registry = state.registry();
    if registry.is_empty() {
        HealthCheck {
            name: "model_registry".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some("no models registered".to_string()),
        }
    } else {
        HealthCheck {
            name: "model_registry".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} models", registry.len())),
        }
    }
}

fn check_credentials(state: &AppState) -> HealthCheck {
    let resolver = state.resolver();
    let available = state
        .registry()
        .iter()
        .filter(|d| resolver.is_available(d))
        .count();

    HealthCheck {
        name: "credentials".to_string(),
        status: if available == 0 {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        },
        message: Some(format!("{available} models have an API key")),
    }
}
