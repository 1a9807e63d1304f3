pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::add_document::AddDocumentUseCase;
use crate::application::agent::Agent;
use crate::application::search::SearchUseCase;
use crate::application::summarize::{SummarizeUseCase, SummaryOutcome};
use crate::application::tools::default_registry;
use crate::domain::entities::document::{RankedDoc, ScoredDoc};
use crate::domain::entities::interaction::AgentReply;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::summarizer_port::SummarizerProvider;
use crate::domain::text::truncate_words;
use crate::infrastructure::embeddings::mock::MockProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::llm::dummy::DummyProvider;
use crate::infrastructure::llm::openai::OpenAiSummarizer;
use crate::infrastructure::memory::store::MemoryStore;
use std::sync::Arc;

/// Below this confidence the summarizer is retried once in strict mode.
pub const DEFAULT_RETRY_THRESHOLD: f64 = 0.6;

pub struct OpenRag {
    add_document_uc: AddDocumentUseCase,
    search_uc: Arc<SearchUseCase>,
    summarize_uc: Arc<SummarizeUseCase>,
    agent: Agent,
    store: Arc<dyn DocumentStore>,
}

impl OpenRag {
    /// Build with providers selected from the environment. Defaults are
    /// fully offline (hash embeddings, dummy summarizer).
    pub fn new() -> Self {
        let embedding_provider =
            std::env::var("OPENRAG_EMBEDDING_PROVIDER").unwrap_or_else(|_| "mock".into());
        let embedding_key = std::env::var("OPENRAG_EMBEDDING_API_KEY").unwrap_or_default();
        let embedding_model = std::env::var("OPENRAG_EMBEDDING_MODEL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = match embedding_provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(embedding_key, embedding_model)),
            _ => Arc::new(MockProvider),
        };

        let llm_provider = std::env::var("OPENRAG_LLM_PROVIDER").unwrap_or_else(|_| "dummy".into());
        let llm_key = std::env::var("OPENRAG_LLM_API_KEY").unwrap_or_default();
        let llm_model = std::env::var("OPENRAG_LLM_MODEL").ok();

        let llm: Arc<dyn SummarizerProvider> = match llm_provider.as_str() {
            "openai" => Arc::new(OpenAiSummarizer::new(llm_key, llm_model)),
            _ => Arc::new(DummyProvider),
        };

        let retry_threshold = std::env::var("OPENRAG_RETRY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RETRY_THRESHOLD);

        Self::with_providers(embedder, llm, retry_threshold)
    }

    /// Explicit dependency injection; the store is always a fresh
    /// in-memory corpus owned by this instance.
    pub fn with_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn SummarizerProvider>,
        retry_threshold: f64,
    ) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

        let search_uc = Arc::new(SearchUseCase::new(store.clone(), embedder.clone()));
        let summarize_uc = Arc::new(SummarizeUseCase::new(llm, retry_threshold));
        let agent = Agent::new(default_registry(search_uc.clone(), summarize_uc.clone()));

        Self {
            add_document_uc: AddDocumentUseCase::new(store.clone(), embedder),
            search_uc,
            summarize_uc,
            agent,
            store,
        }
    }

    // Delegating methods
    pub async fn add_document(&self, text: &str) -> Result<String, DomainError> {
        self.add_document_uc.execute(text).await
    }

    pub fn keyword_search(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<RankedDoc>, DomainError> {
        self.search_uc.keyword_search(keyword, limit)
    }

    pub async fn semantic_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ScoredDoc>, DomainError> {
        self.search_uc.vector_search(query, limit).await
    }

    pub async fn summarize(
        &self,
        text: &str,
        max_words: usize,
    ) -> Result<SummaryOutcome, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput(
                "Text cannot be empty or whitespace".into(),
            ));
        }
        let mut outcome = self.summarize_uc.execute(text, max_words).await;
        outcome.summary = truncate_words(&outcome.summary, max_words);
        Ok(outcome)
    }

    pub async fn agent_run(&self, text: &str) -> AgentReply {
        self.agent.run(text).await
    }

    /// Wipe the corpus. Exists for test isolation; agent history is
    /// untouched.
    pub fn clear_documents(&self) -> Result<(), DomainError> {
        self.store.clear().map_err(DomainError::Storage)
    }

    pub fn document_count(&self) -> Result<usize, DomainError> {
        self.store.len().map_err(DomainError::Storage)
    }
}

impl Default for OpenRag {
    fn default() -> Self {
        Self::new()
    }
}
