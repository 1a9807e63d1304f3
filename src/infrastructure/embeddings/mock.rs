use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::infrastructure::embeddings::l2_normalize;
use sha2::{Digest, Sha256};

const DIM: usize = 128;

/// Deterministic, offline embedding for tests and demos. The SHA-256
/// digest of the text is repeated out to [`DIM`] bytes and L2-normalized,
/// so the same input yields the same unit vector on every machine, with
/// no API calls.
pub struct MockProvider;

impl MockProvider {
    fn hash_vector(text: &str) -> Vec<f32> {
        let digest = Sha256::digest(text.as_bytes());
        let raw: Vec<f32> = digest
            .iter()
            .cycle()
            .take(DIM)
            .map(|byte| *byte as f32)
            .collect();
        l2_normalize(raw)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for MockProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        Ok(Self::hash_vector(text))
    }

    fn dimension(&self) -> usize {
        DIM
    }
}
