//! Prompt domain: request types and prompt assembly

mod assembler;
mod request_type;

pub use assembler::{PromptAssembler, PromptInput, DEFAULT_USER_NAME};
pub use request_type::RequestType;
