//! Shared test helpers.

use openrag::infrastructure::embeddings::mock::MockProvider;
use openrag::infrastructure::llm::dummy::DummyProvider;
use openrag::{OpenRag, DEFAULT_RETRY_THRESHOLD};
use std::sync::Arc;

pub fn setup() -> OpenRag {
    OpenRag::with_providers(
        Arc::new(MockProvider),
        Arc::new(DummyProvider),
        DEFAULT_RETRY_THRESHOLD,
    )
}
