use async_trait::async_trait;
use medscribe_core::{ChatMessage, LLMProvider, LLMResponse, Transcriber};
use reqwest::Client;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::retry::retry_with_backoff;

/// Model used for Whisper audio transcription.
const TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// Client for the Groq OpenAI-compatible API: chat completions plus
/// Whisper transcription.
#[derive(Clone)]
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating GroqProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Helper method to send a single chat request
    async fn try_chat(&self, request: &serde_json::Value) -> anyhow::Result<LLMResponse> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?
            .to_string();

        let usage = response["usage"].as_object().map(|u| medscribe_core::Usage {
            prompt_tokens: u32::try_from(u["prompt_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
            completion_tokens: u32::try_from(u["completion_tokens"].as_u64().unwrap_or(0))
                .unwrap_or(0),
            total_tokens: u32::try_from(u["total_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
        });

        Ok(LLMResponse { content, usage })
    }

    /// Helper method to upload one transcription request.
    ///
    /// The multipart form cannot be reused across attempts, so it is
    /// rebuilt from the owned audio bytes on every call.
    async fn try_transcribe(&self, audio: &[u8], file_name: &str) -> anyhow::Result<String> {
        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(file_name.to_string())
            .mime_str("audio/wav")?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", TRANSCRIPTION_MODEL)
            .text("response_format", "verbose_json");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let text = response["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing text"))?
            .trim()
            .to_string();

        Ok(text)
    }
}

#[async_trait]
impl LLMProvider for GroqProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
    ) -> anyhow::Result<LLMResponse> {
        let request = json!({
            "model": model,
            "messages": messages,
            "temperature": temperature,
        });

        info!("Sending request to Groq API: model={}", model);

        // Retry with backoff: 2s, 4s, 8s
        let response = retry_with_backoff(|| self.try_chat(&request), &[2, 4, 8]).await?;

        info!("Received response from Groq API");
        Ok(response)
    }

    fn default_model(&self) -> &'static str {
        "llama-3.3-70b-versatile"
    }
}

#[async_trait]
impl Transcriber for GroqProvider {
    async fn transcribe(&self, audio: &Path) -> anyhow::Result<String> {
        let bytes = tokio::fs::read(audio).await?;
        let file_name = audio
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        info!(
            "Sending transcription request to Groq API: file={file_name}, bytes={}",
            bytes.len()
        );

        let text =
            retry_with_backoff(|| self.try_transcribe(&bytes, &file_name), &[2, 4, 8]).await?;

        info!("Received transcription from Groq API");
        Ok(text)
    }
}
