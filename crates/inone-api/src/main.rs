use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inone_api::{
    build_router,
    config::{Config, StoreBackend},
    AppState,
};
use inone_llm::{ClientFactory, FrequencyKeywordExtractor, KeywordExtractor};
use inone_persist::{InMemoryPersistenceClient, MongoPersistenceClient, PersistenceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting In-One API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Inference clients
    let provider = config.provider_config();
    tracing::info!(provider = ?provider.provider_type(), "Initializing inference clients");
    let generator = ClientFactory::create_text_generator(provider.clone())?;
    let summarizer = ClientFactory::create_summarizer(provider)?;
    let keyword_extractor: Arc<dyn KeywordExtractor> = Arc::new(FrequencyKeywordExtractor::new());

    // Document store
    let persist: Arc<dyn PersistenceClient> = match config.store.backend {
        StoreBackend::Mongodb => {
            tracing::info!("Connecting to MongoDB");
            let client =
                MongoPersistenceClient::connect(&config.mongo_uri, &config.mongodb.database)
                    .await?;
            tracing::info!(database = %client.database_name(), "MongoDB client ready");
            Arc::new(client)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            Arc::new(InMemoryPersistenceClient::new())
        }
    };

    let state = Arc::new(AppState::new(
        config.clone(),
        persist,
        generator,
        summarizer,
        keyword_extractor,
    ));

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
