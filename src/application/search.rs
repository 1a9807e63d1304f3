use crate::domain::entities::document::{RankedDoc, ScoredDoc};
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;

pub struct SearchUseCase {
    store: Arc<dyn DocumentStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    pub fn keyword_search(&self, keyword: &str, limit: usize) -> Result<Vec<RankedDoc>, DomainError> {
        self.store
            .keyword_query(keyword, limit)
            .map_err(DomainError::Storage)
    }

    /// Embed the query and rank by cosine similarity. An unusable query
    /// vector (empty, or with non-finite components) yields an empty
    /// result; only backend misconfiguration is a hard error.
    pub async fn vector_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ScoredDoc>, DomainError> {
        let vector = self.embedder.embed(query).await?;
        if vector.is_empty() || vector.iter().any(|v| !v.is_finite()) {
            return Ok(vec![]);
        }
        self.store
            .vector_query(&vector, limit)
            .map_err(DomainError::Storage)
    }
}
