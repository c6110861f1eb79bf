use serde::Deserialize;

use crate::domain::llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::domain::prompt::DEFAULT_USER_NAME;
use crate::infrastructure::observability::MetricsConfig;

const ENV_PREFIX: &str = "ORION";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Dashboard session tokens accepted by the API
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub session_tokens: Vec<String>,
}

/// Memory search service used for ASK_QUESTION enrichment
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base URL of the memory service; enrichment is skipped when unset
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_memory_limit")]
    pub limit: u32,
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,
    /// Name the ASK_QUESTION persona addresses
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

fn default_memory_limit() -> u32 {
    5
}

fn default_collection_name() -> String {
    "orion_memory".to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            limit: default_memory_limit(),
            collection_name: default_collection_name(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
            user_name: default_user_name(),
        }
    }
}

impl AppConfig {
    /// Load `config/default`, `config/local`, then `ORION__*` environment
    /// variables. `ORION__AUTH__SESSION_TOKENS` takes a comma-separated list.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.session_tokens")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn server_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        Ok(std::net::SocketAddr::from((
            self.server.host.parse::<std::net::IpAddr>()?,
            self.server.port,
        )))
    }
}
