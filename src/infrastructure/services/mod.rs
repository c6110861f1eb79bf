//! Infrastructure services

mod orion_llm_service;

pub use orion_llm_service::{
    DirectRequest, LlmAnswer, OrionLlmService, OrionLlmServiceConfig, ProbeResult, ProbeStatus,
    StructuredRequest,
};
