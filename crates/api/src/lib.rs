//! HTTP message server and client for the fact-check pipeline.
//!
//! Every pipeline component (the four stage agents and the orchestrator)
//! is served the same way: one [`MessageHandler`] behind a small axum app.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /a2a/agent.json` - Agent card (name, description, version)
//! - `POST /a2a` - Send a message, receive the reply message
//!
//! # Architecture
//!
//! ```text
//! factcheck-client
//!    │
//!    ▼
//! ┌─────────────────┐      ┌──────────┐ ┌───────────┐ ┌─────────┐ ┌───────────┐
//! │  Orchestrator   │ ───► │ Crawler  │ │ Extractor │ │ Checker │ │ Publisher │
//! │  :5005 /a2a     │      │  :5001   │ │   :5002   │ │  :5003  │ │   :5004   │
//! └─────────────────┘      └──────────┘ └─────┬─────┘ └────┬────┘ └─────┬─────┘
//!                                             └────────────┴────────────┘
//!                                                    Tool server :8000
//! ```
//!
//! [`MessageHandler`]: factcheck_common::MessageHandler

pub mod client;
pub mod config;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use client::{is_exit_command, PipelineClient};
pub use config::{Role, ServiceConfig};
pub use state::AppState;

/// Create the router serving one handler.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/a2a", post(routes::send_message))
        .route("/a2a/agent.json", get(routes::agent_card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the message server on the given address.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let agent = state.handler.name().to_string();
    let router = create_router(state);

    info!(%addr, %agent, "Starting message server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
