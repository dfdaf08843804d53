// OpenAI-specific client implementation (chat completions)

use crate::traits::{GenerationRequest, InferenceClient, SummaryRequest, Summarizer, TextGenerator};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini";

/// OpenAI client (HTTP direct, no SDK)
pub struct OpenAIClient {
    http_client: reqwest::Client,
    base_url: String,
    generation_model: String,
    summary_model: String,
}

impl OpenAIClient {
    /// Create new client with API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(
        mut self,
        generation_model: impl Into<String>,
        summary_model: impl Into<String>,
    ) -> Self {
        self.generation_model = generation_model.into();
        self.summary_model = summary_model.into();
        self
    }

    /// Build the chat completion payload for reply generation
    fn build_generation_request(&self, request: &GenerationRequest) -> Value {
        serde_json::json!({
            "model": self.generation_model,
            "messages": [Message::human(request.prompt.as_str())],
            "n": request.num_sequences,
            "max_tokens": request.max_length,
        })
    }

    /// Build the chat completion payload for summarization
    ///
    /// Chat models have no minimum-length knob, so both bounds go into the instruction.
    fn build_summary_request(&self, request: &SummaryRequest) -> Value {
        let instruction = format!(
            "Summarize the following conversation in {} to {} tokens. \
             Reply with the summary only.",
            request.min_length, request.max_length,
        );

        let mut payload = serde_json::json!({
            "model": self.summary_model,
            "messages": [
                Message::system(instruction),
                Message::human(request.text.as_str()),
            ],
            "n": 1,
            "max_tokens": request.max_length,
        });

        if !request.sample {
            if let Some(obj) = payload.as_object_mut() {
                obj.insert("temperature".to_string(), serde_json::json!(0));
            }
        }

        payload
    }

    async fn chat_completion(&self, payload: &Value) -> Result<OpenAIChatResponse> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error ({}): {}", status, error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse response")
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

#[async_trait]
impl TextGenerator for OpenAIClient {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<String>> {
        let payload = self.build_generation_request(&request);
        let raw = self.chat_completion(&payload).await?;

        tracing::debug!(
            model = %self.generation_model,
            choices = raw.choices.len(),
            "OpenAI generation completed"
        );

        raw.choices
            .into_iter()
            .map(|choice| {
                choice
                    .message
                    .content
                    .context("OpenAI returned a choice without content")
            })
            .collect()
    }
}

#[async_trait]
impl Summarizer for OpenAIClient {
    async fn summarize(&self, request: SummaryRequest) -> Result<String> {
        let payload = self.build_summary_request(&request);
        let raw = self.chat_completion(&payload).await?;

        raw.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .context("OpenAI returned no content for summary")
    }
}

impl InferenceClient for OpenAIClient {}

// ============================================================================
// OPENAI-SPECIFIC RESPONSE TYPES (for Chat Completions)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct OpenAIChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    pub content: Option<String>,
}
