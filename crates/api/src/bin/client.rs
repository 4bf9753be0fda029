//! Interactive client for the fact-check orchestrator.
//!
//! Reads lines from stdin, sends each one to the orchestrator and prints
//! the reply. `exit` or `quit` ends the session.

use clap::Parser;
use factcheck_api::{is_exit_command, PipelineClient};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "factcheck-client")]
#[command(about = "Chat with the fact-check orchestrator")]
#[command(version)]
struct Cli {
    /// Orchestrator message endpoint
    #[arg(short, long, default_value = "http://localhost:5005/a2a")]
    endpoint: String,
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut client = PipelineClient::connect(cli.endpoint);

    println!("Connected to {}", client.endpoint());
    println!("Type `start` to run the pipeline, `exit` to quit.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if is_exit_command(&line) {
            break;
        }
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match client.send(&line).await {
            Ok(reply) => println!("{}", reply.display_text()),
            Err(e) => eprintln!("Error: {}", e),
        }
        prompt()?;
    }

    println!("Goodbye.");
    Ok(())
}
