use serde::{Deserialize, Serialize};

/// How many interactions a reply exposes. Older entries stay recorded but
/// are no longer returned.
pub const HISTORY_WINDOW: usize = 10;

/// One executed capability call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub tool: String,
    pub output: String,
}

/// Structured agent response. `history` holds the most recent interactions
/// (at most [`HISTORY_WINDOW`]) in insertion order, ending with the one
/// just produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReply {
    pub tool: String,
    pub output: String,
    pub history: Vec<Interaction>,
}
