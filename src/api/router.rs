use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::orion;
use super::state::AppState;

/// Build the full router.
///
/// `metrics` is merged as-is when present (see `create_metrics_router`).
pub fn create_router_with_state(state: AppState, metrics: Option<Router>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api/orion", orion::create_orion_router())
        .with_state(state);

    let router = match metrics {
        Some(metrics) => router.merge(metrics),
        None => router,
    };

    router
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
