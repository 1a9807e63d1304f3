use crate::application::search::SearchUseCase;
use crate::application::summarize::SummarizeUseCase;
use crate::domain::calc;
use crate::domain::error::ToolFault;
use crate::domain::ports::tool::{Tool, ToolRegistry};
use std::sync::Arc;

/// How many documents the retrieval tools pull per call.
const RETRIEVAL_LIMIT: usize = 3;
/// Word cap for retrieval-augmented answers.
const ANSWER_MAX_WORDS: usize = 80;

/// Sandboxed arithmetic. Bad input collapses into the `calc_error`
/// sentinel, never a tool fault.
pub struct CalculatorTool;

#[async_trait::async_trait]
impl Tool for CalculatorTool {
    async fn execute(&self, payload: &str) -> Result<String, ToolFault> {
        Ok(calc::evaluate(payload)
            .map(|value| value.to_string())
            .unwrap_or_else(|_| "calc_error".to_string()))
    }
}

pub struct EchoTool;

#[async_trait::async_trait]
impl Tool for EchoTool {
    async fn execute(&self, payload: &str) -> Result<String, ToolFault> {
        Ok(payload.to_string())
    }
}

pub struct PingTool;

#[async_trait::async_trait]
impl Tool for PingTool {
    async fn execute(&self, _payload: &str) -> Result<String, ToolFault> {
        Ok("pong".to_string())
    }
}

/// Keyword retrieval over the corpus. Compact JSON keeps the output a
/// plain string like every other tool.
pub struct RagSearchTool {
    search: Arc<SearchUseCase>,
}

impl RagSearchTool {
    pub fn new(search: Arc<SearchUseCase>) -> Self {
        Self { search }
    }
}

#[async_trait::async_trait]
impl Tool for RagSearchTool {
    async fn execute(&self, payload: &str) -> Result<String, ToolFault> {
        let results = self.search.keyword_search(payload, RETRIEVAL_LIMIT)?;
        if results.is_empty() {
            return Ok("no_results".to_string());
        }
        serde_json::to_string(&results).map_err(|e| ToolFault::Serialization(e.to_string()))
    }
}

/// Retrieval-augmented answer: vector search for context, then a
/// confidence-gated summarization over a fixed prompt.
pub struct RagAnswerTool {
    search: Arc<SearchUseCase>,
    summarize: Arc<SummarizeUseCase>,
}

impl RagAnswerTool {
    pub fn new(search: Arc<SearchUseCase>, summarize: Arc<SummarizeUseCase>) -> Self {
        Self { search, summarize }
    }
}

#[async_trait::async_trait]
impl Tool for RagAnswerTool {
    async fn execute(&self, payload: &str) -> Result<String, ToolFault> {
        let results = self.search.vector_search(payload, RETRIEVAL_LIMIT).await?;
        if results.is_empty() {
            let reply = serde_json::json!({ "answer": "no relevant context found", "sources": [] });
            return serde_json::to_string(&reply)
                .map_err(|e| ToolFault::Serialization(e.to_string()));
        }

        let context = results
            .iter()
            .map(|r| format!("- {}", r.text))
            .collect::<Vec<_>>()
            .join("\n\n");
        let prompt = format!(
            "Using only the context below, answer the question.\n\n\
             Question: {payload}\n\nContext:\n{context}\n\nAnswer:"
        );

        let outcome = self.summarize.execute(&prompt, ANSWER_MAX_WORDS).await;
        let sources: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        let reply = serde_json::json!({ "answer": outcome.summary, "sources": sources });
        serde_json::to_string(&reply).map_err(|e| ToolFault::Serialization(e.to_string()))
    }
}

/// The default capability set: calculator, echo, ping and the two
/// retrieval tools.
pub fn default_registry(
    search: Arc<SearchUseCase>,
    summarize: Arc<SummarizeUseCase>,
) -> ToolRegistry {
    let mut tools = ToolRegistry::new();
    tools.insert("calculator".to_string(), Arc::new(CalculatorTool) as Arc<dyn Tool>);
    tools.insert("echo".to_string(), Arc::new(EchoTool) as Arc<dyn Tool>);
    tools.insert("ping".to_string(), Arc::new(PingTool) as Arc<dyn Tool>);
    tools.insert(
        "rag_search".to_string(),
        Arc::new(RagSearchTool::new(search.clone())) as Arc<dyn Tool>,
    );
    tools.insert(
        "rag_answer".to_string(),
        Arc::new(RagAnswerTool::new(search, summarize)) as Arc<dyn Tool>,
    );
    tools
}
