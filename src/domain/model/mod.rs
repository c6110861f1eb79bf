//! Model registry domain

mod defaults;
mod descriptor;
mod registry;

pub use defaults::{
    default_registry, fallback_models, health_probe_models, HEALTH_PRIMARY_MODEL,
    OPENROUTER_API_BASE,
};
pub use descriptor::{ModelDescriptor, ProviderName, UnknownProvider};
pub use registry::ModelRegistry;
