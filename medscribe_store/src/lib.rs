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

//! Patient record persistence and relevance selection.
//!
//! The record log is an append-only JSONL file replayed into memory on
//! open; writes append a single line, never rewriting the file. The
//! keyword selector chooses which stored records accompany a question.

mod error;
mod log;
mod retrieval;

pub use error::StoreError;
pub use log::RecordLog;
pub use retrieval::KeywordSelector;
