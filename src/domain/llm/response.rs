use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Normalized outcome of a single dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LlmResult {
    pub fn success(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            model: Some(model.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            model: None,
            error: Some(error.into()),
        }
    }

    pub fn from_outcome(model_id: &str, outcome: Result<String, DomainError>) -> Self {
        match outcome {
            Ok(content) => Self::success(content, model_id),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
