use async_trait::async_trait;
use medscribe_core::Summarizer;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::prompt::summary_prompt;
use crate::retry::retry_with_backoff;

/// Client for the Gemini generateContent API, used for encounter
/// summarization.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating GeminiProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Helper method to send a single generateContent request
    async fn try_generate(&self, request: &serde_json::Value) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let text = response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing text"))?
            .trim()
            .to_string();

        Ok(text)
    }
}

#[async_trait]
impl Summarizer for GeminiProvider {
    async fn summarize(&self, transcript: &str) -> anyhow::Result<String> {
        let request = json!({
            "contents": [{
                "parts": [{ "text": summary_prompt(transcript) }]
            }]
        });

        info!("Sending summarization request to Gemini API: model={}", self.model);

        let summary = retry_with_backoff(|| self.try_generate(&request), &[2, 4, 8]).await?;

        info!("Received summary from Gemini API");
        Ok(summary)
    }
}
