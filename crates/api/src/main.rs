//! Fact-check pipeline server binary.
//!
//! Usage:
//!   factcheck serve crawler --config crawler.toml
//!   factcheck serve orchestrator --port 5005 --bind 0.0.0.0
//!   factcheck run --config pipeline.toml
//!
//! `serve` runs one component behind the message server. `run` wires all
//! four agents in this process, executes a single pipeline run and prints
//! the orchestrator's reply.

use anyhow::Context;
use clap::{Parser, Subcommand};
use factcheck_agents::{
    CrawlerAgent, ExtractorAgent, FactCheckerAgent, HttpToolClient, PublisherAgent,
};
use factcheck_api::{serve, AppState, Role, ServiceConfig};
use factcheck_common::{AgentClient, Message, MessageHandler, ToolClient};
use factcheck_coordinator::{InProcessAgentClient, Orchestrator, PipelineStages};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "factcheck")]
#[command(about = "Fact-check pipeline agents and orchestrator")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve one pipeline component over HTTP
    Serve {
        /// Component to run
        #[arg(value_enum)]
        role: Role,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Run the whole pipeline once in this process
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,factcheck_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            ServiceConfig::from_file(path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServiceConfig::default()
        }
    };

    match cli.command {
        Commands::Serve { role, port, bind } => {
            let mut server = config.server_for(role);
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(bind) = bind {
                server.host = bind;
            }

            if server.host == "0.0.0.0" {
                tracing::warn!(
                    "Binding to 0.0.0.0 exposes this agent to all network interfaces. \
                     The message protocol has no authentication."
                );
            }

            let handler = build_handler(role, &config)?;
            let addr: SocketAddr = server
                .bind_address()
                .parse()
                .with_context(|| format!("Invalid bind address '{}'", server.bind_address()))?;

            serve(Arc::new(AppState::new(handler)), addr).await
        }
        Commands::Run => {
            let orchestrator = in_process_orchestrator(&config)?;
            let reply = orchestrator.respond(&Message::user("start")).await;
            println!("{}", reply.display_text());
            Ok(())
        }
    }
}

fn tool_client(config: &ServiceConfig) -> Arc<dyn ToolClient> {
    tracing::info!(tools = %config.tools.base_url(), "Using tool endpoint");
    Arc::new(HttpToolClient::from_config(&config.tools))
}

fn build_handler(role: Role, config: &ServiceConfig) -> anyhow::Result<Arc<dyn MessageHandler>> {
    let handler: Arc<dyn MessageHandler> = match role {
        Role::Crawler => {
            if config.crawler.feeds.is_empty() {
                tracing::warn!("No feeds configured; the crawler will return no articles");
            }
            Arc::new(CrawlerAgent::with_http_feeds(config.crawler.clone())?)
        }
        Role::Extractor => Arc::new(ExtractorAgent::new(tool_client(config))),
        Role::Checker => Arc::new(FactCheckerAgent::new(tool_client(config))),
        Role::Publisher => Arc::new(PublisherAgent::new(tool_client(config))),
        Role::Orchestrator => {
            tracing::info!(
                crawler = %config.pipeline.crawler,
                extractor = %config.pipeline.extractor,
                checker = %config.pipeline.checker,
                publisher = %config.pipeline.publisher,
                "Orchestrating remote agents"
            );
            Arc::new(Orchestrator::from_config(&config.pipeline))
        }
    };
    Ok(handler)
}

fn in_process_orchestrator(config: &ServiceConfig) -> anyhow::Result<Orchestrator> {
    let local = |role: Role| -> anyhow::Result<Arc<dyn AgentClient>> {
        Ok(Arc::new(InProcessAgentClient::new(build_handler(role, config)?)))
    };

    Ok(Orchestrator::new(PipelineStages {
        crawler: local(Role::Crawler)?,
        extractor: local(Role::Extractor)?,
        checker: local(Role::Checker)?,
        publisher: local(Role::Publisher)?,
    }))
}
