//! LLM domain models and the provider adapter seam

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::{extract_text, DispatchTarget, ProviderAdapter, ProviderRequest};
pub use request::{GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use response::LlmResult;

#[cfg(test)]
pub use provider::mock::MockProviderAdapter;
