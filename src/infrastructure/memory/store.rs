use crate::domain::entities::document::{Document, RankedDoc, ScoredDoc};
use crate::domain::ports::document_store::DocumentStore;
use std::sync::RwLock;

/// Append-only in-memory corpus. A single lock guards text and vector
/// together, so an insertion is either fully visible to readers or not
/// at all.
pub struct MemoryStore {
    docs: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }

    fn round6(score: f64) -> f64 {
        (score * 1e6).round() / 1e6
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, text: &str, vector: Vec<f32>) -> Result<String, String> {
        let id = uuid::Uuid::new_v4().to_string();
        let mut docs = self.docs.write().map_err(|e| e.to_string())?;
        docs.push(Document {
            id: id.clone(),
            text: text.to_string(),
            vector,
        });
        Ok(id)
    }

    fn keyword_query(&self, keyword: &str, limit: usize) -> Result<Vec<RankedDoc>, String> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(vec![]);
        }

        let docs = self.docs.read().map_err(|e| e.to_string())?;
        let mut scored: Vec<(usize, usize, usize, &Document)> = docs
            .iter()
            .filter_map(|doc| {
                let haystack = doc.text.to_lowercase();
                haystack.find(needle.as_str()).map(|first_pos| {
                    let freq = haystack.matches(needle.as_str()).count();
                    (freq, first_pos, doc.text.len(), doc)
                })
            })
            .collect();

        // Highest frequency first, then earliest occurrence, then shortest
        // document. The sort is stable, so exact ties keep insertion order.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, _, _, doc)| RankedDoc {
                id: doc.id.clone(),
                text: doc.text.clone(),
            })
            .collect())
    }

    fn vector_query(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredDoc>, String> {
        if query.is_empty() || query.iter().any(|v| !v.is_finite()) {
            return Ok(vec![]);
        }

        let docs = self.docs.read().map_err(|e| e.to_string())?;
        let mut scored: Vec<(f64, &Document)> = docs
            .iter()
            // Vectors from a different embedding backend are skipped, not an error
            .filter(|doc| doc.vector.len() == query.len())
            .map(|doc| {
                // Dot product reads as cosine similarity: vectors are
                // L2-normalized at insertion and at query time.
                let dot: f64 = query
                    .iter()
                    .zip(doc.vector.iter())
                    .map(|(q, d)| f64::from(*q) * f64::from(*d))
                    .sum();
                (dot, doc)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(score, doc)| ScoredDoc {
                id: doc.id.clone(),
                text: doc.text.clone(),
                score: Self::round6(score),
            })
            .collect())
    }

    fn clear(&self) -> Result<(), String> {
        let mut docs = self.docs.write().map_err(|e| e.to_string())?;
        docs.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize, String> {
        let docs = self.docs.read().map_err(|e| e.to_string())?;
        Ok(docs.len())
    }
}
