// Configuration layer for provider-agnostic inference client creation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::huggingface::HuggingFaceClient;
use crate::openai::OpenAIClient;
use crate::traits::{InferenceClient, Summarizer, TextGenerator};

/// Type of inference provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    HuggingFace,
    OpenAI,
}

/// Configuration for the Hugging Face Inference API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL (optional, defaults to https://api-inference.huggingface.co)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_model: Option<String>,
}

impl HuggingFaceConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: None,
            generation_model: None,
            summary_model: None,
        }
    }
}

/// Configuration for OpenAI provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    /// Base URL for OpenAI API (optional, defaults to https://api.openai.com/v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_model: Option<String>,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            generation_model: None,
            summary_model: None,
        }
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderDetails {
    HuggingFace(HuggingFaceConfig),
    OpenAI(OpenAIConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    /// Create Hugging Face provider config
    pub fn huggingface(api_key: Option<String>) -> Self {
        Self {
            details: ProviderDetails::HuggingFace(HuggingFaceConfig::new(api_key)),
        }
    }

    /// Create OpenAI provider config
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::OpenAI(OpenAIConfig::new(api_key)),
        }
    }

    /// Override the provider base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = Some(base_url.into());
        match &mut self.details {
            ProviderDetails::HuggingFace(c) => c.base_url = base_url,
            ProviderDetails::OpenAI(c) => c.base_url = base_url,
        }
        self
    }

    /// Override the generation and summarization models
    pub fn with_models(
        mut self,
        generation_model: impl Into<String>,
        summary_model: impl Into<String>,
    ) -> Self {
        let (generation_model, summary_model) =
            (Some(generation_model.into()), Some(summary_model.into()));
        match &mut self.details {
            ProviderDetails::HuggingFace(c) => {
                c.generation_model = generation_model;
                c.summary_model = summary_model;
            }
            ProviderDetails::OpenAI(c) => {
                c.generation_model = generation_model;
                c.summary_model = summary_model;
            }
        }
        self
    }

    /// Get the provider type
    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::HuggingFace(_) => ProviderType::HuggingFace,
            ProviderDetails::OpenAI(_) => ProviderType::OpenAI,
        }
    }
}

/// Factory for creating inference clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create an inference client from provider configuration
    pub fn create_client(config: ProviderConfig) -> Result<Arc<dyn InferenceClient>> {
        match config.details {
            ProviderDetails::HuggingFace(hf) => Ok(Arc::new(Self::huggingface(hf)?)),
            ProviderDetails::OpenAI(openai) => Ok(Arc::new(Self::openai(openai)?)),
        }
    }

    /// Create a text generator from provider configuration
    pub fn create_text_generator(config: ProviderConfig) -> Result<Arc<dyn TextGenerator>> {
        match config.details {
            ProviderDetails::HuggingFace(hf) => Ok(Arc::new(Self::huggingface(hf)?)),
            ProviderDetails::OpenAI(openai) => Ok(Arc::new(Self::openai(openai)?)),
        }
    }

    /// Create a summarizer from provider configuration
    pub fn create_summarizer(config: ProviderConfig) -> Result<Arc<dyn Summarizer>> {
        match config.details {
            ProviderDetails::HuggingFace(hf) => Ok(Arc::new(Self::huggingface(hf)?)),
            ProviderDetails::OpenAI(openai) => Ok(Arc::new(Self::openai(openai)?)),
        }
    }

    fn huggingface(config: HuggingFaceConfig) -> Result<HuggingFaceClient> {
        let mut client = HuggingFaceClient::new(config.api_key)?;
        if let Some(base_url) = config.base_url {
            client = client.with_base_url(base_url);
        }
        if let (Some(generation), Some(summary)) = (config.generation_model, config.summary_model) {
            client = client.with_models(generation, summary);
        }
        Ok(client)
    }

    fn openai(config: OpenAIConfig) -> Result<OpenAIClient> {
        if config.api_key.is_empty() {
            anyhow::bail!("OpenAI provider requires an API key");
        }
        let mut client = OpenAIClient::new(config.api_key)?;
        if let Some(base_url) = config.base_url {
            client = client.with_base_url(base_url);
        }
        if let (Some(generation), Some(summary)) = (config.generation_model, config.summary_model) {
            client = client.with_models(generation, summary);
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huggingface_config() {
        let config = ProviderConfig::huggingface(None);
        assert_eq!(config.provider_type(), ProviderType::HuggingFace);
    }

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-key");
        assert_eq!(config.provider_type(), ProviderType::OpenAI);
    }

    #[test]
    fn test_provider_config_tagged_serialization() {
        let config = ProviderConfig::huggingface(Some("hf-key".to_string()))
            .with_models("gpt2", "facebook/bart-large-cnn");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "huggingface");
        assert_eq!(json["summary_model"], "facebook/bart-large-cnn");

        let parsed: ProviderConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.provider_type(), ProviderType::HuggingFace);
    }

    #[test]
    fn test_factory_rejects_openai_without_key() {
        let result = ClientFactory::create_client(ProviderConfig::openai(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_factory_builds_anonymous_huggingface_client() {
        let result = ClientFactory::create_client(
            ProviderConfig::huggingface(None).with_base_url("http://localhost:9999"),
        );
        assert!(result.is_ok());
    }
}
