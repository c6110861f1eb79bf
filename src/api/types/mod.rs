//! HTTP wire types

pub mod error;
pub mod json;
pub mod orion;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use orion::{
    HealthProbeResponse, KeysResponse, LlmRequestBody, LlmRequestMode, LlmResponseBody,
    ModelSummary, ModelsResponse,
};
