use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use super::{MemoryHit, MemoryQuery};

/// Failure of a best-effort memory search.
///
/// Callers recover from every variant locally; none of these reach the client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnrichmentError {
    #[error("memory search transport failure: {0}")]
    Transport(String),

    #[error("memory search rejected: {0}")]
    Rejected(String),

    #[error("memory search returned malformed data: {0}")]
    Malformed(String),
}

/// Memories retrieved for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentContext {
    pub memories: Vec<MemoryHit>,
    /// True only when a filter was sent and the search succeeded
    pub filters_applied: bool,
}

impl EnrichmentContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(memories: Vec<MemoryHit>, filters_applied: bool) -> Self {
        Self {
            memories,
            filters_applied,
        }
    }
}

/// Port for the memory search service
#[async_trait]
pub trait MemorySearch: Send + Sync + Debug {
    async fn search(&self, query: &MemoryQuery) -> Result<Vec<MemoryHit>, EnrichmentError>;
}
