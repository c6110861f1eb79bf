//! Dashboard session authentication

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::auth::Session;

pub const SESSION_HEADER: &str = "x-session-token";
pub const SESSION_COOKIE: &str = "orion_session";

/// Extractor that requires a valid dashboard session.
///
/// The token is read from, in order:
/// - `Authorization: Bearer <token>`
/// - `X-Session-Token: <token>`
/// - the `orion_session` cookie
///
/// Only headers are inspected, so the check runs before any body extractor.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        match state.session_verifier.verify(&token) {
            Some(session) => {
                debug!(token_hint = %session.token_hint, "Session accepted");
                Ok(RequireSession(session))
            }
            None => Err(ApiError::unauthorized("Unauthorized")),
        }
    }
}

fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let header_token = || {
        headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    };

    bearer
        .or_else(header_token)
        .map(str::to_string)
        .or_else(|| session_cookie(headers))
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
