use serde::{Deserialize, Serialize};

/// A stored document. Immutable once inserted; removed only by a full
/// store clear.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub vector: Vec<f32>,
}

/// Keyword query hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDoc {
    pub id: String,
    pub text: String,
}

/// Vector query hit with its cosine score, rounded to 6 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDoc {
    pub id: String,
    pub text: String,
    pub score: f64,
}
