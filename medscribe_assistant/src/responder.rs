//! Context-augmented question answering.

use crate::context::render_context_table;
use crate::error::AssistantError;
use medscribe_core::{
    ChatMessage, ContextSelector, DEFAULT_SYSTEM_PROMPT, LLMProvider, PatientRecord, Role,
};
use tracing::{debug, info};

/// Configuration for the responder.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Chat model sent to the provider.
    pub chat_model: String,
    /// Fixed system role message.
    pub system_prompt: String,
    /// Sampling temperature; moderate by default to balance determinism
    /// and fluency.
    pub temperature: f32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            chat_model: "llama-3.3-70b-versatile".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.7,
        }
    }
}

impl ResponderConfig {
    #[must_use]
    pub fn with_chat_model(mut self, model: String) -> Self {
        self.chat_model = model;
        self
    }

    #[must_use]
    pub fn with_system_prompt(mut self, prompt: String) -> Self {
        self.system_prompt = prompt;
        self
    }
}

/// Answers free-text questions with stored records as context.
pub struct Responder<P, S>
where
    P: LLMProvider,
    S: ContextSelector,
{
    provider: P,
    selector: S,
    config: ResponderConfig,
}

impl<P, S> Responder<P, S>
where
    P: LLMProvider,
    S: ContextSelector,
{
    pub const fn new(provider: P, selector: S, config: ResponderConfig) -> Self {
        Self {
            provider,
            selector,
            config,
        }
    }

    /// Select relevant records, assemble the prompt, and return the
    /// model's trimmed answer verbatim. No post-validation is applied;
    /// provider failure is the request's failure.
    pub async fn answer(
        &self,
        question: &str,
        records: &[PatientRecord],
    ) -> Result<String, AssistantError> {
        let context = self.selector.select(question, records);
        info!(
            "answering question with {} of {} records as context",
            context.len(),
            records.len()
        );

        let data_context = render_context_table(&context);
        let full_prompt = format!(
            "{}\n\nRelevant Patient Data:\n{}\n\nQuestion: {}",
            self.config.system_prompt, data_context, question
        );
        debug!("assembled prompt ({} chars)", full_prompt.len());

        let messages = [
            ChatMessage {
                role: Role::System,
                content: self.config.system_prompt.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: full_prompt,
            },
        ];

        let response = self
            .provider
            .chat(&messages, &self.config.chat_model, self.config.temperature)
            .await?;

        Ok(response.content.trim().to_string())
    }
}
