//! Orion request types and their default models

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const AZURE_GPT: &str = "azure/gpt-4.1";
const DEEPSEEK_CHAT: &str = "openrouter/deepseek/deepseek-chat-v3-0324:free";
const GEMINI_FLASH: &str = "openrouter/google/gemini-2.0-flash-exp:free";
const DEEPSEEK_CODER: &str = "openrouter/deepseek/deepseek-coder-v2-0324:free";

/// Kind of work a structured request asks for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestType {
    AskQuestion,
    DraftCommunication,
    JournalEntry,
    OpportunityEvaluation,
    OrionImprovement,
    JdAnalysis,
    CvComponentTailoring,
    ProfileSummaryTailoring,
    CodeGeneration,
    CodeExplanation,
    /// Any value outside the known set, normalised to upper snake case
    Other(String),
}

impl RequestType {
    const KNOWN: [RequestType; 10] = [
        RequestType::AskQuestion,
        RequestType::DraftCommunication,
        RequestType::JournalEntry,
        RequestType::OpportunityEvaluation,
        RequestType::OrionImprovement,
        RequestType::JdAnalysis,
        RequestType::CvComponentTailoring,
        RequestType::ProfileSummaryTailoring,
        RequestType::CodeGeneration,
        RequestType::CodeExplanation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            RequestType::AskQuestion => "ASK_QUESTION",
            RequestType::DraftCommunication => "DRAFT_COMMUNICATION",
            RequestType::JournalEntry => "JOURNAL_ENTRY",
            RequestType::OpportunityEvaluation => "OPPORTUNITY_EVALUATION",
            RequestType::OrionImprovement => "ORION_IMPROVEMENT",
            RequestType::JdAnalysis => "JD_ANALYSIS",
            RequestType::CvComponentTailoring => "CV_COMPONENT_TAILORING",
            RequestType::ProfileSummaryTailoring => "PROFILE_SUMMARY_TAILORING",
            RequestType::CodeGeneration => "CODE_GENERATION",
            RequestType::CodeExplanation => "CODE_EXPLANATION",
            RequestType::Other(name) => name,
        }
    }

    /// Model used when a request does not name one
    pub fn default_model(&self) -> &'static str {
        match self {
            RequestType::OpportunityEvaluation
            | RequestType::DraftCommunication
            | RequestType::OrionImprovement => AZURE_GPT,
            RequestType::AskQuestion | RequestType::JournalEntry => DEEPSEEK_CHAT,
            RequestType::JdAnalysis
            | RequestType::CvComponentTailoring
            | RequestType::ProfileSummaryTailoring => GEMINI_FLASH,
            RequestType::CodeGeneration | RequestType::CodeExplanation => DEEPSEEK_CODER,
            RequestType::Other(_) => DEEPSEEK_CHAT,
        }
    }

    pub fn is_ask_question(&self) -> bool {
        matches!(self, RequestType::AskQuestion)
    }

    /// Case-insensitive lookup treating `-` as `_`; never fails
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();

        Self::KNOWN
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .unwrap_or(RequestType::Other(normalized))
    }
}

impl FromStr for RequestType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequestType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_name(&raw))
    }
}
