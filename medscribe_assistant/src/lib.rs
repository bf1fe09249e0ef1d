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

//! Encounter intake and question answering over the record log.
//!
//! The intake pipeline turns captured speech into a persisted patient
//! record: transcribe, summarize, extract fields, append. The responder
//! answers free-text questions by selecting relevant records as context
//! for the chat model.

mod context;
mod error;
mod intake;
mod responder;

pub use context::render_context_table;
pub use error::AssistantError;
pub use intake::{Intake, IntakeSummary};
pub use responder::{Responder, ResponderConfig};
