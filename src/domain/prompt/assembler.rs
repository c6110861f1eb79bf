//! Prompt assembly from request context pieces
//!
//! Assembly is a pure function of its input: the same `PromptInput` always
//! yields the same messages, byte for byte.

use super::RequestType;
use crate::domain::llm::Message;
use crate::domain::memory::MemoryHit;

pub const DEFAULT_USER_NAME: &str = "Tomide";

const MEMORIES_START: &str = "--- RETRIEVED MEMORIES START ---";
const MEMORIES_END: &str = "--- RETRIEVED MEMORIES END ---";
const NO_MEMORIES: &str = "No relevant memories were found for this question.";

/// Context pieces for one structured request
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub request_type: &'a RequestType,
    pub primary_context: &'a str,
    pub profile_context: Option<&'a str>,
    pub system_context: Option<&'a str>,
    pub memory_results: &'a [MemoryHit],
    pub web_context: Option<&'a str>,
}

impl<'a> PromptInput<'a> {
    pub fn new(request_type: &'a RequestType, primary_context: &'a str) -> Self {
        Self {
            request_type,
            primary_context,
            profile_context: None,
            system_context: None,
            memory_results: &[],
            web_context: None,
        }
    }

    pub fn with_profile_context(mut self, profile_context: Option<&'a str>) -> Self {
        self.profile_context = profile_context;
        self
    }

    pub fn with_system_context(mut self, system_context: Option<&'a str>) -> Self {
        self.system_context = system_context;
        self
    }

    pub fn with_memories(mut self, memory_results: &'a [MemoryHit]) -> Self {
        self.memory_results = memory_results;
        self
    }

    pub fn with_web_context(mut self, web_context: Option<&'a str>) -> Self {
        self.web_context = web_context;
        self
    }
}

/// Builds the message list sent to the dispatcher
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    user_name: String,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

impl PromptAssembler {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn assemble(&self, input: &PromptInput<'_>) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = present(input.system_context) {
            messages.push(Message::system(system));
        }

        let body = if input.request_type.is_ask_question() {
            self.ask_question_prompt(input)
        } else {
            sectioned_prompt(input)
        };
        messages.push(Message::user(body));

        messages
    }

    fn ask_question_prompt(&self, input: &PromptInput<'_>) -> String {
        let name = &self.user_name;
        let profile = present(input.profile_context)
            .unwrap_or("No profile information was provided.");

        let mut prompt = format!(
            "You are Orion, {name}'s AI Life-Architecture System and trusted advisor. \
             Answer {name}'s question using what you know about {name} from the profile \
             and the retrieved memories below. Refer to specific memories when they are \
             relevant, say so plainly when the context does not contain the answer, and \
             keep the answer grounded, practical and personal.\n\n\
             {name}'s profile:\n{profile}\n\n{MEMORIES_START}\n"
        );

        if input.memory_results.is_empty() {
            prompt.push_str(NO_MEMORIES);
            prompt.push('\n');
        } else {
            prompt.push_str(&numbered_memories(input.memory_results));
            prompt.push('\n');
        }
        prompt.push_str(MEMORIES_END);

        if let Some(web) = present(input.web_context) {
            prompt.push_str("\n\nWeb research context:\n");
            prompt.push_str(web);
        }

        prompt.push_str(&format!("\n\n{name}'s question:\n{}", input.primary_context));
        prompt
    }
}

fn sectioned_prompt(input: &PromptInput<'_>) -> String {
    let memories = (!input.memory_results.is_empty()).then(|| numbered_memories(input.memory_results));

    let sections = [
        ("Primary context", present(Some(input.primary_context))),
        ("Profile context", present(input.profile_context)),
        ("Relevant memories", memories.as_deref()),
        ("Web research context", present(input.web_context)),
    ];

    sections
        .into_iter()
        .filter_map(|(heading, body)| body.map(|body| format!("{heading}:\n{body}")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn numbered_memories(memories: &[MemoryHit]) -> String {
    memories
        .iter()
        .enumerate()
        .map(|(i, hit)| format!("Memory {}: {}", i + 1, hit.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
