pub mod types;
pub mod traits;
pub mod config;
pub mod keywords;
pub mod huggingface;
pub mod openai;

pub use traits::{
    TextGenerator,
    Summarizer,
    InferenceClient,
    GenerationRequest, SummaryRequest,
};

pub use config::{ClientFactory, ProviderConfig, ProviderType};
pub use keywords::{FrequencyKeywordExtractor, KeywordExtractor};
pub use huggingface::HuggingFaceClient;
pub use openai::OpenAIClient;
pub use types::{Message, Content};
