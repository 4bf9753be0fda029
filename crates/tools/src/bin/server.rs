//! Tool server binary.
//!
//! Usage:
//!   factcheck-tools --config tools.toml
//!   factcheck-tools --port 8000 --bind 0.0.0.0

use anyhow::Context;
use clap::Parser;
use factcheck_tools::config::API_KEY_ENV;
use factcheck_tools::{create_router, ToolServer, ToolServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "factcheck-tools")]
#[command(about = "Tool endpoints for the fact-check pipeline")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,factcheck_tools=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ToolServerConfig::from_file(path)?,
        None => ToolServerConfig::default(),
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.host = bind;
    }

    let server = ToolServer::new(&config)?;
    let names: Vec<_> = server.catalog().into_iter().map(|t| t.name).collect();
    tracing::info!(tools = ?names, "Registered tools");

    if config.llm.resolve_api_key().is_none() {
        tracing::warn!("{} is not set; extract_claims will fail", API_KEY_ENV);
    }

    let addr: SocketAddr = config
        .server
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_address()))?;

    tracing::info!(%addr, site_dir = %config.posts.site_dir.display(), "Starting tool server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(Arc::new(server))).await?;

    Ok(())
}
