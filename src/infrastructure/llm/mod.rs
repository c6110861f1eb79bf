//! LLM provider adapters and dispatch

mod azure_openai;
mod cohere;
mod dispatcher;
mod gemini;
pub mod http_client;
mod openai_compat;
mod openrouter;
mod together;

pub use azure_openai::AzureOpenAiAdapter;
pub use cohere::CohereAdapter;
pub use dispatcher::ProviderDispatcher;
pub use gemini::GeminiAdapter;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai_compat::{ChatCompletionsAdapter, GROQ_CHAT_URL, MISTRAL_CHAT_URL};
pub use openrouter::OpenRouterAdapter;
pub use together::{flatten_prompt, TogetherAdapter};
