use clap::Parser;
use openrag::cli::commands::{Cli, Commands};
use openrag::OpenRag;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let rag = OpenRag::new();

    if let Err(e) = run_command(rag, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rag: OpenRag, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Agent { text } => {
            let reply = rag.agent_run(&text).await;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Commands::Add { text } => {
            let id = rag.add_document(&text).await?;
            println!("{}", serde_json::json!({ "id": id }));
        }
        Commands::Search { keyword, limit } => {
            let results = rag.keyword_search(&keyword, limit)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Semantic { query, limit } => {
            let results = rag.semantic_search(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Summarize { text, max_words } => {
            let outcome = rag.summarize(&text, max_words).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Ping => {
            println!("{}", serde_json::json!({ "status": "ok" }));
        }
    }
    Ok(())
}
