use crate::domain::entities::interaction::{AgentReply, Interaction, HISTORY_WINDOW};
use crate::domain::ports::tool::ToolRegistry;
use std::sync::Mutex;

/// Alias → canonical capability name. Resolution happens before registry
/// lookup; keys are unique so it is deterministic.
const TOOL_ALIASES: [(&str, &str); 6] = [
    ("calc", "calculator"),
    ("calculate", "calculator"),
    ("echo", "echo"),
    ("ping", "ping"),
    ("rag", "rag_search"),
    ("rag_answer", "rag_answer"),
];

fn resolve_alias(alias: &str) -> Option<&'static str> {
    TOOL_ALIASES
        .iter()
        .find(|(a, _)| *a == alias)
        .map(|(_, name)| *name)
}

/// Entirely composed of digits, operators, parens, dot and whitespace.
fn is_math_like(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-*/().".contains(c))
}

/// Any digit or operator character anywhere in the text.
fn has_math_chars(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_ascii_digit() || "+-*/()".contains(c))
}

/// Where the planner routed an input, with the payload the capability
/// will receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub tool: String,
    pub payload: String,
}

/// Rule-based dispatcher over a fixed capability registry. Keeps an
/// append-only interaction history; every reply exposes the most recent
/// entries (at most [`HISTORY_WINDOW`]).
pub struct Agent {
    tools: ToolRegistry,
    history: Mutex<Vec<Interaction>>,
}

impl Agent {
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Fixed-priority rule cascade. The order is load-bearing: alias
    /// prefix, then the ping literal, then the arithmetic heuristic,
    /// then the echo fallback.
    pub fn decide(&self, text: &str) -> Decision {
        let trimmed = text.trim();

        if let Some((alias, payload)) = trimmed.split_once(':') {
            let alias = alias.trim().to_lowercase();
            if let Some(name) = resolve_alias(&alias) {
                // An alias for an unregistered capability falls through
                // to the later rules instead of failing.
                if self.tools.contains_key(name) {
                    return Decision {
                        tool: name.to_string(),
                        payload: payload.trim().to_string(),
                    };
                }
            }
        }

        if trimmed.eq_ignore_ascii_case("ping") {
            return Decision {
                tool: "ping".to_string(),
                payload: String::new(),
            };
        }

        if is_math_like(trimmed) || has_math_chars(trimmed) {
            return Decision {
                tool: "calculator".to_string(),
                payload: trimmed.to_string(),
            };
        }

        Decision {
            tool: "echo".to_string(),
            payload: trimmed.to_string(),
        }
    }

    /// Execute the decided capability inside a fault boundary and record
    /// the interaction. A misbehaving tool becomes a `tool_error:`
    /// output, never a crash.
    pub async fn run(&self, text: &str) -> AgentReply {
        let decision = self.decide(text);

        let Some(tool) = self.tools.get(&decision.tool) else {
            return self.record("none", "no_suitable_tool");
        };

        let output = match tool.execute(&decision.payload).await {
            Ok(output) => output,
            Err(fault) => format!("tool_error: {}", fault.kind()),
        };
        self.record(&decision.tool, &output)
    }

    /// Snapshot of the full recorded history; a reply's `history` field
    /// is a view over the tail of this.
    pub fn history(&self) -> Vec<Interaction> {
        match self.history.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, tool: &str, output: &str) -> AgentReply {
        let mut history = match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        history.push(Interaction {
            tool: tool.to_string(),
            output: output.to_string(),
        });
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        AgentReply {
            tool: tool.to_string(),
            output: output.to_string(),
            history: history[start..].to_vec(),
        }
    }
}
