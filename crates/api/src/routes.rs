//! HTTP route handlers for the message server.

use crate::AppState;
use axum::{extract::State, Json};
use factcheck_common::Message;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        agent: state.handler.name().to_string(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Public description of a served agent.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub version: String,
}

pub async fn agent_card(State(state): State<Arc<AppState>>) -> Json<AgentCard> {
    Json(AgentCard {
        name: state.handler.name().to_string(),
        description: state.handler.description().to_string(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Deliver one message to the served handler and return its reply.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(message): Json<Message>,
) -> Json<Message> {
    let _turn = state.gate.lock().await;

    info!(
        agent = %state.handler.name(),
        message_id = %message.message_id,
        content_preview = %message.display_text().chars().take(50).collect::<String>(),
        "Received message"
    );

    let reply = state.handler.respond(&message).await;
    debug!(agent = %state.handler.name(), reply_id = %reply.message_id, error = reply.is_error(), "Replying");

    Json(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".into(),
            agent: "checker".into(),
            version: "0.1.0".into(),
            uptime_seconds: 100,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("\"agent\":\"checker\""));
    }
}
