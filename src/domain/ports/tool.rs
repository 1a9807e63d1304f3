use crate::domain::error::ToolFault;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named capability the agent can invoke with a free-text payload.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    async fn execute(&self, payload: &str) -> Result<String, ToolFault>;
}

/// Registry keyed by canonical lowercase capability name.
pub type ToolRegistry = BTreeMap<String, Arc<dyn Tool>>;
