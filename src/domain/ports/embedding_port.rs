use crate::domain::error::DomainError;

/// Produces L2-normalized embedding vectors. Normalization is part of the
/// contract: vector queries score by plain dot product, which only reads
/// as cosine similarity over unit-length vectors.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;
    fn dimension(&self) -> usize;
}
