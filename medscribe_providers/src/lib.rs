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

//! HTTP clients for the external AI collaborators.
//!
//! Groq serves chat completions and Whisper transcription; Gemini serves
//! encounter summarization. Both clients retry transient failures with
//! backoff before surfacing the error to the caller.

mod gemini;
mod groq;
mod prompt;
mod retry;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use prompt::summary_prompt;
pub use retry::retry_with_backoff;
