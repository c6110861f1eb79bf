//! Domain layer - Core routing types and pure logic

pub mod credentials;
pub mod error;
pub mod llm;
pub mod memory;
pub mod model;
pub mod prompt;

pub use credentials::{CredentialResolver, CredentialStatus, ResolvedCredential, SecretStore};
pub use error::DomainError;
pub use llm::{
    DispatchTarget, GenerationParams, LlmResult, Message, MessageRole, ProviderAdapter,
    ProviderRequest,
};
pub use memory::{
    EnrichmentContext, EnrichmentError, MemoryFilter, MemoryHit, MemoryQuery, MemorySearch,
};
pub use model::{ModelDescriptor, ModelRegistry, ProviderName};
pub use prompt::{PromptAssembler, PromptInput, RequestType};
