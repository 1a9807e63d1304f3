use crate::domain::entities::document::{RankedDoc, ScoredDoc};

/// The in-memory corpus. An insertion must be atomic: a reader never
/// observes a document's text without its vector.
pub trait DocumentStore: Send + Sync {
    /// Insert a document with its embedding, returning the fresh id.
    fn insert(&self, text: &str, vector: Vec<f32>) -> Result<String, String>;

    /// Keyword-ranked query. An empty keyword yields an empty result
    /// without scanning; so does a zero limit.
    fn keyword_query(&self, keyword: &str, limit: usize) -> Result<Vec<RankedDoc>, String>;

    /// Cosine-ranked query against a pre-embedded query vector. Stored
    /// vectors of a different dimensionality are skipped, not an error.
    fn vector_query(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredDoc>, String>;

    /// Drop the whole corpus. Exists for test isolation.
    fn clear(&self) -> Result<(), String>;

    fn len(&self) -> Result<usize, String>;
}
