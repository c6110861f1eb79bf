use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::memory::{EnrichmentError, MemoryHit, MemoryQuery, MemorySearch};
use crate::domain::DomainError;
use crate::infrastructure::llm::HttpClientTrait;

const SEARCH_PATH: &str = "/api/orion/memory/search";

/// Memory search over the Orion memory service HTTP API
#[derive(Debug, Clone)]
pub struct HttpMemorySearch {
    client: Arc<dyn HttpClientTrait>,
    url: String,
}

impl HttpMemorySearch {
    pub fn new(client: Arc<dyn HttpClientTrait>, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `queryText` is what the memory route reads; `query` is kept for the
    /// search-memory variant of the same service.
    fn request_body(query: &MemoryQuery) -> Value {
        let mut body = json!({
            "queryText": query.query,
            "query": query.query,
            "limit": query.limit,
            "collectionName": query.collection_name,
        });

        if let Some(filter) = &query.filter {
            body["filter"] = filter.to_qdrant_filter();
        }

        body
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    success: bool,
    #[serde(default)]
    results: Vec<ScoredPoint>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScoredPoint {
    #[serde(default)]
    score: Option<f64>,
    payload: PointPayload,
}

#[derive(Debug, Deserialize)]
struct PointPayload {
    text: String,
    #[serde(default, rename = "type")]
    source_type: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<ScoredPoint> for MemoryHit {
    fn from(point: ScoredPoint) -> Self {
        MemoryHit {
            text: point.payload.text,
            score: point.score,
            source_type: point.payload.source_type,
            tags: point.payload.tags,
        }
    }
}

fn to_enrichment_error(error: DomainError) -> EnrichmentError {
    match error {
        DomainError::ProviderHttp { .. } => EnrichmentError::Rejected(error.to_string()),
        DomainError::MalformedResponse { .. } => EnrichmentError::Malformed(error.to_string()),
        other => EnrichmentError::Transport(other.to_string()),
    }
}

#[async_trait]
impl MemorySearch for HttpMemorySearch {
    async fn search(&self, query: &MemoryQuery) -> Result<Vec<MemoryHit>, EnrichmentError> {
        let body = Self::request_body(query);
        let authorization = query.auth_token.as_ref().map(|t| format!("Bearer {t}"));

        let mut headers = vec![("Content-Type", "application/json")];
        if let Some(value) = authorization.as_deref() {
            headers.push(("Authorization", value));
        }

        let raw = self
            .client
            .post_json(&self.url, headers, &body)
            .await
            .map_err(to_enrichment_error)?;

        let response: SearchResponse = serde_json::from_value(raw)
            .map_err(|e| EnrichmentError::Malformed(e.to_string()))?;

        if !response.success {
            return Err(EnrichmentError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "memory search reported failure".to_string()),
            ));
        }

        debug!(hits = response.results.len(), "Memory search completed");

        Ok(response.results.into_iter().map(MemoryHit::from).collect())
    }
}
