use serde::Deserialize;

/// Prometheus exporter settings (`[metrics]` section)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetricsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Route the exposition text is served on
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_metrics_path(),
        }
    }
}
