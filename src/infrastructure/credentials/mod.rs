//! Secret store implementations

mod env_provider;
mod memory_store;

pub use env_provider::EnvSecretStore;
pub use memory_store::InMemorySecretStore;
