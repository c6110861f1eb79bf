use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Generation parameters forwarded to the provider.
///
/// Values are passed through as given; providers are the ones that reject
/// out-of-range temperatures or token limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl GenerationParams {
    pub fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 1000);
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let params = GenerationParams::default()
            .with_temperature(3.5)
            .with_max_tokens(0);

        assert_eq!(params.temperature, 3.5);
        assert_eq!(params.max_tokens, 0);
    }
}
