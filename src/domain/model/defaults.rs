//! Built-in model table and fallback chains

use super::{ModelDescriptor, ModelRegistry, ProviderName};

pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Model probed first by the health check
pub const HEALTH_PRIMARY_MODEL: &str = "azure/gpt-4.1";

/// Registry with every model the dashboard knows about.
///
/// Each credential reference names the environment variable holding the key,
/// e.g. `GROQ_API_KEY` for all `groq/*` models.
pub fn default_registry() -> ModelRegistry {
    use ProviderName::*;

    ModelRegistry::new(vec![
        ModelDescriptor::new(Azure, "azure/gpt-4.1", "AZURE_OPENAI_API_KEY")
            .with_azure_deployment("AZURE_OPENAI_ENDPOINT", "gpt-4.1", "2025-01-01-preview")
            .with_costs(0.0000015, 0.000002)
            .with_limits(32768, 4096),
        ModelDescriptor::new(Azure, "azure/DeepSeek-R1", "AZURE_DEEPSEEK_API_KEY")
            .with_azure_deployment("AZURE_DEEPSEEK_ENDPOINT", "DeepSeek-R1", "2024-05-01-preview")
            .with_limits(32768, 4096)
            .with_comment("DeepSeek-R1 model deployed on Azure OpenAI"),
        ModelDescriptor::new(Groq, "groq/llama3-70b-8192", "GROQ_API_KEY")
            .with_costs(0.0, 0.0)
            .with_limits(8192, 4096)
            .with_comment("Current Llama3 70b on Groq"),
        ModelDescriptor::new(Groq, "groq/gemma2-9b-it", "GROQ_API_KEY")
            .with_comment("Current Gemma2 9b on Groq"),
        ModelDescriptor::new(Groq, "groq/llama-3.1-70b-versatile", "GROQ_API_KEY")
            .with_comment("Recommended replacement for Llama 3.1 and Tool Use models"),
        ModelDescriptor::new(Groq, "groq/mistral-hermes-24b", "GROQ_API_KEY")
            .with_comment("Recommended replacement for Mixtral 8x7B"),
        ModelDescriptor::new(Groq, "groq/deepseek-r1-distill-qwen-32b", "GROQ_API_KEY")
            .with_comment("Reasoning model"),
        ModelDescriptor::new(OpenRouter, "openrouter/mistralai/mistral-7b-instruct", "OPEN_ROUTER_API_KEY")
            .with_api_base(OPENROUTER_API_BASE)
            .with_comment("Free/low-cost model on OpenRouter"),
        ModelDescriptor::new(OpenRouter, "openrouter/google/gemini-2.0-flash-exp:free", "OPEN_ROUTER_API_KEY")
            .with_api_base(OPENROUTER_API_BASE)
            .with_limits(128000, 8192)
            .with_comment("Gemini 2.0 Flash experimental free tier via OpenRouter"),
        ModelDescriptor::new(OpenRouter, "openrouter/deepseek/deepseek-chat-v3-0324:free", "OPEN_ROUTER_API_KEY")
            .with_api_base(OPENROUTER_API_BASE)
            .with_limits(32768, 4096)
            .with_comment("DeepSeek Chat v3 free tier via OpenRouter"),
        ModelDescriptor::new(OpenRouter, "openrouter/deepseek/deepseek-coder-v2-0324:free", "OPEN_ROUTER_API_KEY")
            .with_api_base(OPENROUTER_API_BASE)
            .with_limits(32768, 4096)
            .with_comment("DeepSeek Coder v2 free tier via OpenRouter"),
        ModelDescriptor::new(OpenRouter, "openrouter/anthropic/claude-3-5-sonnet", "OPEN_ROUTER_API_KEY")
            .with_api_base(OPENROUTER_API_BASE)
            .with_comment("Anthropic Claude 3.5 Sonnet via OpenRouter"),
        ModelDescriptor::new(Mistral, "mistral/mistral-large-latest", "MISTRAL_API_KEY"),
        ModelDescriptor::new(Mistral, "mistral/mistral-small-latest", "MISTRAL_API_KEY"),
        ModelDescriptor::new(Gemini, "gemini/gemini-1.5-pro-latest", "GEMINI_API_KEY")
            .with_comment("Gemini 1.5 Pro via Google AI Studio"),
        ModelDescriptor::new(Gemini, "gemini/gemini-1.5-flash-latest", "GEMINI_API_KEY")
            .with_comment("Gemini 1.5 Flash via Google AI Studio"),
        ModelDescriptor::new(Cohere, "cohere/command-r-plus", "COHERE_API_KEY"),
        ModelDescriptor::new(TogetherAi, "together_ai/meta-llama/Llama-3.1-70B-Instruct-hf", "TOGETHER_API_KEY"),
        ModelDescriptor::new(TogetherAi, "together_ai/Qwen/Qwen2-72B-Instruct", "TOGETHER_API_KEY"),
    ])
}

const AZURE_GPT_FALLBACKS: &[&str] = &[
    "azure/DeepSeek-R1",
    "groq/llama3-70b-8192",
    "openrouter/deepseek/deepseek-chat-v3-0324:free",
    "openrouter/google/gemini-2.0-flash-exp:free",
    "openrouter/anthropic/claude-3-5-sonnet",
    "mistral/mistral-large-latest",
    "gemini/gemini-1.5-pro-latest",
];

const AZURE_DEEPSEEK_FALLBACKS: &[&str] = &[
    "azure/gpt-4.1",
    "groq/llama3-70b-8192",
    "openrouter/deepseek/deepseek-chat-v3-0324:free",
    "openrouter/google/gemini-2.0-flash-exp:free",
    "openrouter/anthropic/claude-3-5-sonnet",
    "mistral/mistral-large-latest",
    "gemini/gemini-1.5-pro-latest",
];

const DEFAULT_FALLBACKS: &[&str] = &[
    "azure/gpt-4.1",
    "azure/DeepSeek-R1",
    "openrouter/deepseek/deepseek-chat-v3-0324:free",
    "groq/llama3-70b-8192",
    "openrouter/google/gemini-2.0-flash-exp:free",
    "mistral/mistral-large-latest",
    "openrouter/anthropic/claude-3-5-sonnet",
    "gemini/gemini-1.5-pro-latest",
    "groq/gemma2-9b-it",
];

/// Alternative models for a given model id
pub fn fallback_models(model_id: &str) -> &'static [&'static str] {
    match model_id {
        "azure/gpt-4.1" => AZURE_GPT_FALLBACKS,
        "azure/DeepSeek-R1" => AZURE_DEEPSEEK_FALLBACKS,
        _ => DEFAULT_FALLBACKS,
    }
}

/// Models probed by the health check, primary first
pub fn health_probe_models() -> Vec<&'static str> {
    std::iter::once(HEALTH_PRIMARY_MODEL)
        .chain(fallback_models(HEALTH_PRIMARY_MODEL).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_every_provider() {
        let registry = default_registry();
        for provider in ProviderName::ALL {
            assert!(
                !registry.models_for(provider).is_empty(),
                "no models for {}",
                provider
            );
        }
        assert_eq!(registry.len(), 19);
    }

    #[test]
    fn test_default_registry_ids_carry_their_provider_prefix() {
        let registry = default_registry();
        for descriptor in registry.iter() {
            let prefix = format!("{}/", descriptor.provider);
            assert!(descriptor.model_id.starts_with(&prefix), "{}", descriptor.model_id);
        }
    }

    #[test]
    fn test_azure_models_have_deployment_metadata() {
        let registry = default_registry();
        for descriptor in registry.models_for(ProviderName::Azure) {
            assert!(descriptor.endpoint_ref.is_some());
            assert!(descriptor.deployment_id.is_some());
            assert!(descriptor.api_version.is_some());
        }
    }

    #[test]
    fn test_fallback_chains_only_reference_registered_models() {
        let registry = default_registry();
        for chain in [AZURE_GPT_FALLBACKS, AZURE_DEEPSEEK_FALLBACKS, DEFAULT_FALLBACKS] {
            for model_id in chain {
                assert!(registry.lookup(model_id).is_some(), "{}", model_id);
            }
        }
    }

    #[test]
    fn test_health_probe_models_start_with_primary() {
        let models = health_probe_models();
        assert_eq!(models[0], HEALTH_PRIMARY_MODEL);
        assert_eq!(models.len(), 1 + AZURE_GPT_FALLBACKS.len());
        assert!(!models[1..].contains(&HEALTH_PRIMARY_MODEL));
    }

    #[test]
    fn test_unknown_model_uses_default_chain() {
        assert_eq!(fallback_models("groq/gemma2-9b-it"), DEFAULT_FALLBACKS);
    }
}
