use std::env;

use crate::domain::SecretStore;

/// Secret store backed by process environment variables.
///
/// `.env` files are loaded into the environment at start-up (see `main`), so
/// this also covers locally configured keys.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    pub fn new() -> Self {
        Self
    }
}

impl SecretStore for EnvSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    fn store_name(&self) -> &'static str {
        "env"
    }
}
