use std::sync::Arc;

use inone_llm::{KeywordExtractor, Summarizer, TextGenerator};
use inone_persist::PersistenceClient;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Collaborators are injected as trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<dyn PersistenceClient>,
    pub generator: Arc<dyn TextGenerator>,
    pub summarizer: Arc<dyn Summarizer>,
    pub keyword_extractor: Arc<dyn KeywordExtractor>,
}

impl AppState {
    pub fn new(
        config: Config,
        persist: Arc<dyn PersistenceClient>,
        generator: Arc<dyn TextGenerator>,
        summarizer: Arc<dyn Summarizer>,
        keyword_extractor: Arc<dyn KeywordExtractor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            persist,
            generator,
            summarizer,
            keyword_extractor,
        }
    }
}
