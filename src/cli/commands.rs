use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "openrag", about = "Rule-routed tool agent with in-memory retrieval")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route free text through the agent and print the structured reply
    Agent {
        text: String,
    },
    /// Add a document to the corpus
    Add {
        text: String,
    },
    /// Keyword-ranked search
    Search {
        keyword: String,
        #[arg(long, default_value = "3")]
        limit: usize,
    },
    /// Cosine-ranked (semantic) search
    Semantic {
        query: String,
        #[arg(long, default_value = "3")]
        limit: usize,
    },
    /// Summarize text with confidence-gated retry
    Summarize {
        text: String,
        #[arg(long, default_value = "80")]
        max_words: usize,
    },
    /// Liveness check
    Ping,
}
