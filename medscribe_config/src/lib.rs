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

//! Configuration file handling for medscribe.

mod schema;

pub use schema::{
    AgentDefaults, AgentsConfig, AudioConfig, Config, ProviderConfig, ProvidersConfig,
    RetrievalConfig, StorageConfig,
};
