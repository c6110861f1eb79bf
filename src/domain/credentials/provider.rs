use std::fmt::Debug;

/// Process-wide key-value secret lookup (environment variables, `.env`, ...)
pub trait SecretStore: Send + Sync + Debug {
    /// Value for `key`; unset and empty values are both `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Provider name for logging/debugging
    fn store_name(&self) -> &'static str;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
