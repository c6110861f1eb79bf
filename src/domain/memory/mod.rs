//! Memory search domain used to enrich prompts

mod query;
mod search;

pub use query::{MemoryFilter, MemoryHit, MemoryQuery};
pub use search::{EnrichmentContext, EnrichmentError, MemorySearch};

#[cfg(test)]
pub use search::mock::MockMemorySearch;
