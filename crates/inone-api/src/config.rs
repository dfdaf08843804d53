use config::{Config as ConfigLoader, ConfigError, Environment, File};
use inone_llm::{ProviderConfig, ProviderType};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/in-one";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub store: StoreConfig,
    pub mongodb: MongoDbConfig,
    pub inference: InferenceConfig,
    pub keywords: KeywordsConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    pub mongo_uri: String,
    pub inference_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    /// Process-local store, lost on restart
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoDbConfig {
    /// Used when the connection URI names no database
    pub database: String,
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            database: "in-one".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub provider: ProviderType,
    pub base_url: Option<String>,
    pub generation_model: Option<String>,
    pub summary_model: Option<String>,
    pub reply_max_length: u32,
    pub summary_max_length: u32,
    pub summary_min_length: u32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::HuggingFace,
            base_url: None,
            generation_model: None,
            summary_model: None,
            reply_max_length: 50,
            summary_max_length: 100,
            summary_min_length: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    /// 0 disables extraction
    pub max_keywords: usize,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self { max_keywords: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. built-in defaults
    /// 2. config/default.toml
    /// 3. config/{ENV}.toml (ENV defaults to "dev")
    /// 4. INONE_-prefixed variables, sections split by `__`
    ///    (e.g. `INONE_SERVER__PORT=9000`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Same layering as [`Config::load`], reading TOML files from `dir`
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        let default_file = dir.join("default");
        let env_file = dir.join(&env);

        let builder = ConfigLoader::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("INONE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.load_secrets();

        Ok(cfg)
    }

    // Secrets never come from TOML.
    fn load_secrets(&mut self) {
        self.mongo_uri =
            std::env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string());
        self.inference_api_key = std::env::var("INFERENCE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
    }

    /// Provider settings for the inference client factory
    pub fn provider_config(&self) -> ProviderConfig {
        let inference = &self.inference;
        let mut provider = match inference.provider {
            ProviderType::HuggingFace => ProviderConfig::huggingface(self.inference_api_key.clone()),
            ProviderType::OpenAI => {
                ProviderConfig::openai(self.inference_api_key.clone().unwrap_or_default())
            }
        };

        if let Some(base_url) = &inference.base_url {
            provider = provider.with_base_url(base_url.clone());
        }
        if let (Some(generation), Some(summary)) =
            (&inference.generation_model, &inference.summary_model)
        {
            provider = provider.with_models(generation.clone(), summary.clone());
        }

        provider
    }
}
