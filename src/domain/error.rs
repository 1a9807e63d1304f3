use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// A runtime failure inside a capability. The agent catches these at its
/// boundary and renders them as `tool_error: <kind>` output strings.
#[derive(Debug, Error)]
pub enum ToolFault {
    #[error("embedding failure: {0}")]
    Embedding(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl ToolFault {
    /// Stable name embedded in the agent's sentinel output.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolFault::Embedding(_) => "EmbeddingFault",
            ToolFault::Storage(_) => "StorageFault",
            ToolFault::Serialization(_) => "SerializationFault",
        }
    }
}

impl From<DomainError> for ToolFault {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Embedding(msg) | DomainError::Parse(msg) => ToolFault::Embedding(msg),
            DomainError::Storage(msg) | DomainError::InvalidInput(msg) => ToolFault::Storage(msg),
        }
    }
}
