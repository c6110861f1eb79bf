//! Infrastructure layer - External service implementations

pub mod auth;
pub mod credentials;
pub mod llm;
pub mod logging;
pub mod memory;
pub mod observability;
pub mod services;
