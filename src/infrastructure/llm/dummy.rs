use crate::domain::ports::summarizer_port::SummarizerProvider;
use crate::domain::text::truncate_words;

/// Offline summarizer for tests and demos: first line of the input,
/// word-capped. Pretends to be confident on short input and hesitant on
/// long input so the retry path is exercised without a real backend.
pub struct DummyProvider;

#[async_trait::async_trait]
impl SummarizerProvider for DummyProvider {
    async fn summarize(&self, text: &str, max_words: usize, _strict: bool) -> (String, f64) {
        let snippet = text.trim().lines().next().unwrap_or_default();
        let summary = truncate_words(snippet, max_words);
        let confidence = if text.len() < 500 { 0.85 } else { 0.55 };
        (summary, confidence)
    }
}
