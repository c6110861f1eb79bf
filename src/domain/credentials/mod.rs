//! Credential management domain

mod credential;
mod provider;
mod resolver;

pub use credential::{CredentialStatus, ResolvedCredential};
pub use provider::SecretStore;
pub use resolver::CredentialResolver;
