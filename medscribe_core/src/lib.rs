#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod extract;
pub mod record;

pub use extract::extract_patient_fields;
pub use record::{FieldValue, PatientFields, PatientRecord, UNKNOWN_SENTINEL};

/// Default system prompt for answering questions over patient records.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI medical assistant.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
    ) -> anyhow::Result<LLMResponse>;
    fn default_model(&self) -> &str;
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &Path) -> anyhow::Result<String>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> anyhow::Result<String>;
}

/// Strategy seam for choosing which stored records accompany a question.
///
/// Implementations decide relevance however they like (keyword match,
/// ranking, recency); the responder only sees the selected subset.
pub trait ContextSelector: Send + Sync {
    fn select<'a>(&self, query: &str, records: &'a [PatientRecord]) -> Vec<&'a PatientRecord>;
}
