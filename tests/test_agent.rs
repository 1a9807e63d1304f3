mod common;

use openrag::application::agent::Agent;
use openrag::application::search::SearchUseCase;
use openrag::application::summarize::SummarizeUseCase;
use openrag::application::tools::default_registry;
use openrag::domain::error::ToolFault;
use openrag::domain::ports::document_store::DocumentStore;
use openrag::domain::ports::tool::{Tool, ToolRegistry};
use openrag::infrastructure::embeddings::mock::MockProvider;
use openrag::infrastructure::llm::dummy::DummyProvider;
use openrag::infrastructure::memory::store::MemoryStore;
use std::sync::Arc;

fn build_agent() -> Agent {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let search = Arc::new(SearchUseCase::new(store, Arc::new(MockProvider)));
    let summarize = Arc::new(SummarizeUseCase::new(Arc::new(DummyProvider), 0.6));
    Agent::new(default_registry(search, summarize))
}

#[tokio::test]
async fn test_decide_and_run_calculator() {
    let rag = common::setup();
    let reply = rag.agent_run("(-1)*(2 + 2)").await;
    assert_eq!(reply.tool, "calculator");
    assert_eq!(reply.output, "-4");
}

#[tokio::test]
async fn test_calculator_rejects_words() {
    let rag = common::setup();
    let reply = rag.agent_run("foo + bar").await;
    assert_eq!(reply.tool, "calculator");
    assert_eq!(reply.output, "calc_error");
}

#[tokio::test]
async fn test_calc_alias_prefix() {
    let rag = common::setup();
    let reply = rag.agent_run("calc: 3 * (4 + 5)").await;
    assert_eq!(reply.tool, "calculator");
    assert_eq!(reply.output, "27");
}

#[tokio::test]
async fn test_alias_matches_direct_evaluation() {
    let rag = common::setup();
    let reply = rag.agent_run("calc: 3 * (4 + 5)").await;
    let direct = openrag::domain::calc::evaluate("3 * (4 + 5)").unwrap();
    assert_eq!(reply.output, direct.to_string());
}

#[tokio::test]
async fn test_run_ping() {
    let rag = common::setup();
    let reply = rag.agent_run("ping").await;
    assert_eq!(reply.tool, "ping");
    assert_eq!(reply.output, "pong");
}

#[tokio::test]
async fn test_ping_literal_is_case_insensitive() {
    let rag = common::setup();
    let reply = rag.agent_run("  PING  ").await;
    assert_eq!(reply.tool, "ping");
    assert_eq!(reply.output, "pong");
}

#[tokio::test]
async fn test_run_echo() {
    let rag = common::setup();
    let reply = rag.agent_run("hello, this is a test").await;
    assert_eq!(reply.tool, "echo");
    assert_eq!(reply.output, "hello, this is a test");
}

#[test]
fn test_decide_echo_fallback() {
    let agent = build_agent();
    for text in ["hello there", "what is love", "no alias here"] {
        assert_eq!(agent.decide(text).tool, "echo", "routed {text:?} wrong");
    }
}

#[test]
fn test_decide_priority_order() {
    let agent = build_agent();
    // The bare literal routes to ping...
    assert_eq!(agent.decide("ping").tool, "ping");
    // ...but an alias prefix outranks it
    assert_eq!(agent.decide("calc: ping").tool, "calculator");
    // ...and a single digit anywhere routes to the calculator
    assert_eq!(agent.decide("ping 2").tool, "calculator");
    assert_eq!(agent.decide("version 2").tool, "calculator");
}

#[test]
fn test_unknown_alias_falls_through() {
    let agent = build_agent();
    assert_eq!(agent.decide("unknown: payload").tool, "echo");
    assert_eq!(agent.decide("unknown: 5").tool, "calculator");
}

#[test]
fn test_alias_for_unregistered_tool_falls_through() {
    let mut tools = ToolRegistry::new();
    tools.insert(
        "echo".to_string(),
        Arc::new(openrag::application::tools::EchoTool) as Arc<dyn Tool>,
    );
    let agent = Agent::new(tools);
    // "rag" resolves in the alias table but rag_search is not registered
    assert_eq!(agent.decide("rag: something").tool, "echo");
}

#[tokio::test]
async fn test_history_grows_in_order() {
    let rag = common::setup();
    rag.agent_run("ping").await;
    rag.agent_run("hello world").await;
    let reply = rag.agent_run("3 * 5").await;

    assert_eq!(reply.history.len(), 3);
    assert_eq!(reply.history[0].tool, "ping");
    assert_eq!(reply.history[0].output, "pong");
    assert_eq!(reply.history[1].tool, "echo");
    assert_eq!(reply.history[1].output, "hello world");
    assert_eq!(reply.history[2].tool, "calculator");
    assert_eq!(reply.history[2].output, "15");
}

#[tokio::test]
async fn test_history_window_caps_at_ten() {
    let rag = common::setup();
    for i in 0..12 {
        rag.agent_run(&format!("echo: message {i}")).await;
    }
    let reply = rag.agent_run("echo: final").await;

    assert_eq!(reply.history.len(), 10);
    assert_eq!(reply.history[0].output, "message 3");
    assert_eq!(reply.history[9].output, "final");
}

#[tokio::test]
async fn test_empty_registry_yields_none() {
    let agent = Agent::new(ToolRegistry::new());
    let reply = agent.run("No tools available").await;
    assert_eq!(reply.tool, "none");
    assert_eq!(reply.output, "no_suitable_tool");
    assert_eq!(reply.history.len(), 1);
}

#[tokio::test]
async fn test_full_history_is_retained_beyond_the_window() {
    let agent = build_agent();
    for i in 0..15 {
        agent.run(&format!("echo: {i}")).await;
    }
    // Replies expose ten entries, the agent remembers all of them
    assert_eq!(agent.history().len(), 15);
    assert_eq!(agent.history()[0].output, "0");
}

struct ExplodingTool;

#[async_trait::async_trait]
impl Tool for ExplodingTool {
    async fn execute(&self, _payload: &str) -> Result<String, ToolFault> {
        Err(ToolFault::Storage("backing store went away".into()))
    }
}

#[tokio::test]
async fn test_tool_fault_becomes_sentinel_output() {
    let mut tools = ToolRegistry::new();
    tools.insert("echo".to_string(), Arc::new(ExplodingTool) as Arc<dyn Tool>);
    let agent = Agent::new(tools);

    let reply = agent.run("anything at all").await;
    assert_eq!(reply.tool, "echo");
    assert!(reply.output.starts_with("tool_error:"));
    assert!(reply.output.contains("StorageFault"));
}
