use crate::domain::ports::summarizer_port::SummarizerProvider;
use crate::domain::text::truncate_words;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat-completions summarizer. The port is total, so every failure mode
/// (transport, HTTP status, missing JSON, bad schema) collapses into a
/// low-confidence fallback instead of an error.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }

    async fn request(&self, text: &str, max_words: usize, strict: bool) -> Result<String, String> {
        let mut system = format!(
            "You are a concise assistant. Summarize the user's text in at most \
             {max_words} words. Always return JSON with keys: summary, confidence"
        );
        if strict {
            system.push_str(" If you cannot comply exactly, lower confidence. JSON only.");
        }
        let prompt = format!(
            "Text:\n{text}\n\nReturn JSON like: {{\"summary\": \"...\", \"confidence\": 0.0}}"
        );

        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: self.model.clone(),
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: system,
                    },
                    ChatMessage {
                        role: "user",
                        content: prompt,
                    },
                ],
                temperature: 0.2,
            })
            .send()
            .await
            .map_err(|e| format!("OpenAI API error: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("OpenAI API {status}: {body}"));
        }

        let result: ChatResponse = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| "OpenAI API returned no choices".to_string())
    }

    /// Pull the `{...}` blob out of the model's reply and read
    /// summary/confidence from it, degrading to the raw text at 0.4
    /// confidence when no well-formed JSON is present.
    fn parse_reply(content: &str, max_words: usize) -> (String, f64) {
        let trimmed = content.trim();
        let blob = match (trimmed.find('{'), trimmed.rfind('}')) {
            (Some(start), Some(end)) if start < end => &trimmed[start..=end],
            _ => return (truncate_words(trimmed, max_words), 0.4),
        };

        match serde_json::from_str::<serde_json::Value>(blob) {
            Ok(data) => {
                let summary: String = data
                    .get("summary")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .trim()
                    .chars()
                    .take(1000)
                    .collect();
                let confidence = data
                    .get("confidence")
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.4);
                (summary, confidence.clamp(0.0, 1.0))
            }
            Err(_) => (truncate_words(trimmed, max_words), 0.4),
        }
    }
}

#[async_trait::async_trait]
impl SummarizerProvider for OpenAiSummarizer {
    async fn summarize(&self, text: &str, max_words: usize, strict: bool) -> (String, f64) {
        if self.api_key.is_empty() {
            eprintln!("Warning: OPENRAG_LLM_API_KEY not set; returning empty summary");
            return (String::new(), 0.0);
        }
        match self.request(text, max_words, strict).await {
            Ok(content) => Self::parse_reply(&content, max_words),
            Err(e) => {
                eprintln!("Warning: summarization request failed: {e}");
                (String::new(), 0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_reply() {
        let (summary, confidence) =
            OpenAiSummarizer::parse_reply(r#"{"summary": "short", "confidence": 0.9}"#, 80);
        assert_eq!(summary, "short");
        assert!((confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let (summary, confidence) = OpenAiSummarizer::parse_reply(
            "Sure! Here you go: {\"summary\": \"ok\", \"confidence\": 0.7} hope it helps",
            80,
        );
        assert_eq!(summary, "ok");
        assert!((confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_without_json_falls_back() {
        let (summary, confidence) = OpenAiSummarizer::parse_reply("just plain prose", 2);
        assert_eq!(summary, "just plain");
        assert!((confidence - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_confidence_clamped() {
        let (_, confidence) =
            OpenAiSummarizer::parse_reply(r#"{"summary": "s", "confidence": 3.2}"#, 80);
        assert!((confidence - 1.0).abs() < f64::EPSILON);
    }
}
