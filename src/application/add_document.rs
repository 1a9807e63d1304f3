use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;

pub struct AddDocumentUseCase {
    store: Arc<dyn DocumentStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl AddDocumentUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed and insert, returning the fresh document id. Embedding
    /// failure propagates: a document stored without a usable vector
    /// would corrupt ranking silently.
    pub async fn execute(&self, text: &str) -> Result<String, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("Text cannot be empty".into()));
        }
        let vector = self.embedder.embed(text).await?;
        let expected = self.embedder.dimension();
        if expected > 0 && vector.len() != expected {
            eprintln!(
                "Warning: embedding has dimension {} but the provider reports {}; vector queries may skip this document",
                vector.len(),
                expected
            );
        }
        self.store.insert(text, vector).map_err(DomainError::Storage)
    }
}
