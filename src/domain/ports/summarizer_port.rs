/// Summarization backend. Returns `(summary, confidence in [0,1])`.
///
/// The port is total: implementations must coerce malformed provider
/// output into a low-confidence fallback instead of surfacing an error.
#[async_trait::async_trait]
pub trait SummarizerProvider: Send + Sync {
    async fn summarize(&self, text: &str, max_words: usize, strict: bool) -> (String, f64);
}
