//! Question answering command: typed or spoken questions over the record
//! log.

use medscribe_assistant::{Responder, ResponderConfig};
use medscribe_config::Config;
use medscribe_core::{DEFAULT_SYSTEM_PROMPT, Transcriber};
use medscribe_store::KeywordSelector;
use std::time::Duration;
use tracing::info;

use super::init_common_components;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// Typed question (spoken capture when absent)
    pub message: Option<String>,
    /// Capture duration override for a spoken question
    pub seconds: Option<u64>,
}

/// Strategy for executing the Ask command.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components()?;
        let defaults = &common.config.agents.defaults;

        let responder_config = ResponderConfig {
            chat_model: defaults.chat_model.clone(),
            system_prompt: defaults
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature: defaults.temperature,
        };
        let selector =
            KeywordSelector::new().with_fallback_window(common.config.retrieval.fallback_window);
        let responder = Responder::new(common.groq.clone(), selector, responder_config);

        let question = if let Some(message) = input.message {
            message
        } else {
            let seconds = input.seconds.unwrap_or(common.config.audio.question_seconds);
            let wav_path = Config::ensure_config_dir()?.join("chat_audio.wav");
            medscribe_audio::record_wav(&wav_path, Duration::from_secs(seconds))?;

            let question = common.groq.transcribe(&wav_path).await?;
            println!("Question: {question}");
            question
        };

        info!("Answering question over {} records", common.log.len());
        let answer = responder.answer(&question, common.log.records()).await?;

        println!("{answer}");
        Ok(())
    }
}
