use crate::domain::ports::summarizer_port::SummarizerProvider;
use crate::domain::values::confidence::Confidence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of the confidence-gated retry wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutcome {
    pub summary: String,
    pub confidence: Confidence,
    pub retried: bool,
}

pub struct SummarizeUseCase {
    llm: Arc<dyn SummarizerProvider>,
    retry_threshold: f64,
}

impl SummarizeUseCase {
    pub fn new(llm: Arc<dyn SummarizerProvider>, retry_threshold: f64) -> Self {
        Self {
            llm,
            retry_threshold,
        }
    }

    /// One lenient pass; below the threshold, one strict pass. The higher
    /// confidence wins and an exact tie keeps the first result. No state
    /// is held across the provider calls, so concurrent executions never
    /// serialize against each other.
    pub async fn execute(&self, text: &str, max_words: usize) -> SummaryOutcome {
        let (summary, confidence) = self.llm.summarize(text, max_words, false).await;

        if confidence < self.retry_threshold {
            let (strict_summary, strict_confidence) =
                self.llm.summarize(text, max_words, true).await;
            let (summary, confidence) = if strict_confidence > confidence {
                (strict_summary, strict_confidence)
            } else {
                (summary, confidence)
            };
            return SummaryOutcome {
                summary,
                confidence: Confidence::clamped(confidence),
                retried: true,
            };
        }

        SummaryOutcome {
            summary,
            confidence: Confidence::clamped(confidence),
            retried: false,
        }
    }
}
