use anyhow::Result;
use async_trait::async_trait;

/// Trait for open-ended text generation (GPT-2 style continuation)
///
/// One call may return several independently sampled continuations.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate `request.num_sequences` continuations of `request.prompt`
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<String>>;
}

/// Trait for abstractive summarization
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a single summary of `request.text`
    async fn summarize(&self, request: SummaryRequest) -> Result<String>;
}

/// Convenience trait for clients that support both generation and summarization
pub trait InferenceClient: TextGenerator + Summarizer {}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Upper bound on output length, in model tokens
    pub max_length: u32,
    pub num_sequences: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_length: 50,
            num_sequences: 1,
        }
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn num_sequences(mut self, n: u32) -> Self {
        self.num_sequences = n;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
    /// `false` asks for deterministic (greedy/beam) decoding
    pub sample: bool,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: 100,
            min_length: 30,
            sample: false,
        }
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn sample(mut self, sample: bool) -> Self {
        self.sample = sample;
        self
    }
}
