// Hugging Face Inference API client (text-generation and summarization pipelines)

use crate::traits::{GenerationRequest, InferenceClient, SummaryRequest, Summarizer, TextGenerator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

const HUGGINGFACE_API_BASE: &str = "https://api-inference.huggingface.co";

pub const DEFAULT_GENERATION_MODEL: &str = "gpt2";
pub const DEFAULT_SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Hugging Face Inference API client
///
/// Talks to hosted pipelines: one model for text generation, one for summarization.
/// The API key is optional; anonymous calls are rate limited by the provider.
pub struct HuggingFaceClient {
    http_client: reqwest::Client,
    base_url: String,
    generation_model: String,
    summary_model: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", key))
                    .context("Invalid API key format")?,
            );
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: HUGGINGFACE_API_BASE.to_string(),
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

    fn build_generation_payload(request: &GenerationRequest) -> Value {
        serde_json::json!({
            "inputs": request.prompt,
            "parameters": {
                "max_length": request.max_length,
                "num_return_sequences": request.num_sequences,
                "do_sample": true,
                "return_full_text": true,
            },
            "options": { "wait_for_model": true },
        })
    }

    fn build_summary_payload(request: &SummaryRequest) -> Value {
        serde_json::json!({
            "inputs": request.text,
            "parameters": {
                "max_length": request.max_length,
                "min_length": request.min_length,
                "do_sample": request.sample,
            },
            "options": { "wait_for_model": true },
        })
    }

    async fn run_pipeline<T: DeserializeOwned>(&self, model: &str, payload: &Value) -> Result<T> {
        let response = self
            .http_client
            .post(format!("{}/models/{}", self.base_url, model))
            .json(payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Hugging Face API error ({}): {}", status, error_text);
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
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<String>> {
        let payload = Self::build_generation_payload(&request);
        let outputs: Vec<GeneratedText> = self
            .run_pipeline(&self.generation_model, &payload)
            .await?;

        tracing::debug!(
            model = %self.generation_model,
            sequences = outputs.len(),
            "Hugging Face generation completed"
        );

        Ok(outputs.into_iter().map(|o| o.generated_text).collect())
    }
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    async fn summarize(&self, request: SummaryRequest) -> Result<String> {
        let payload = Self::build_summary_payload(&request);
        let outputs: Vec<SummaryText> = self
            .run_pipeline(&self.summary_model, &payload)
            .await?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .context("Hugging Face returned no summary")
    }
}

impl InferenceClient for HuggingFaceClient {}

// ============================================================================
// PIPELINE OUTPUT TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct SummaryText {
    summary_text: String,
}
