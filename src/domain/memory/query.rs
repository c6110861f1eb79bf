//! Memory search query and result types

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Restriction of a memory search to source types and/or tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    pub source_types: Vec<String>,
    pub tags: Vec<String>,
}

impl MemoryFilter {
    pub fn new(source_types: Vec<String>, tags: Vec<String>) -> Self {
        Self { source_types, tags }
    }

    /// Build a filter from optional request lists; `None` when both are empty
    pub fn from_lists(source_types: Option<Vec<String>>, tags: Option<Vec<String>>) -> Option<Self> {
        let filter = Self::new(
            non_blank(source_types.unwrap_or_default()),
            non_blank(tags.unwrap_or_default()),
        );

        if filter.is_empty() {
            None
        } else {
            Some(filter)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_types.is_empty() && self.tags.is_empty()
    }

    /// Qdrant `must` clause matching any listed source type and any listed tag.
    ///
    /// Memory points store their source type under the `type` payload key.
    pub fn to_qdrant_filter(&self) -> Value {
        let mut must = Vec::new();

        if !self.source_types.is_empty() {
            must.push(json!({
                "key": "type",
                "match": { "any": self.source_types }
            }));
        }

        if !self.tags.is_empty() {
            must.push(json!({
                "key": "tags",
                "match": { "any": self.tags }
            }));
        }

        json!({ "must": must })
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// One memory search call
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryQuery {
    pub query: String,
    pub limit: u32,
    pub filter: Option<MemoryFilter>,
    pub collection_name: String,
    /// Session token forwarded as a bearer credential
    pub auth_token: Option<String>,
}

impl MemoryQuery {
    pub fn new(query: impl Into<String>, limit: u32, collection_name: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit,
            filter: None,
            collection_name: collection_name.into(),
            auth_token: None,
        }
    }

    pub fn with_filter(mut self, filter: Option<MemoryFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

/// A retrieved memory snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryHit {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MemoryHit {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: None,
            source_type: None,
            tags: Vec::new(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }
}
