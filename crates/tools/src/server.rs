//! Tool dispatch and the HTTP router serving it.

use crate::config::ToolServerConfig;
use crate::extract::ClaimExtractor;
use crate::publish::PostWriter;
use crate::tools::{self, CheckClaimInput, ExtractClaimsInput, GeneratePostInput, ToolInfo};
use crate::wikidata::WikidataClient;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use factcheck_common::tool::{CHECK_CLAIM, EXTRACT_CLAIMS, GENERATE_POST};
use factcheck_common::{FactCheckError, Result, ToolCall, ToolResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Hosts `extract_claims`, `check_claim` and `generate_post`.
pub struct ToolServer {
    extractor: ClaimExtractor,
    wikidata: WikidataClient,
    posts: PostWriter,
}

impl ToolServer {
    pub fn new(config: &ToolServerConfig) -> Result<Self> {
        Ok(Self {
            extractor: ClaimExtractor::new(config.llm.clone())?,
            wikidata: WikidataClient::new(config.wikidata.clone())?,
            posts: PostWriter::new(config.posts.clone()),
        })
    }

    pub fn catalog(&self) -> Vec<ToolInfo> {
        tools::catalog()
    }

    /// Run one tool call. Failures come back as error responses carrying a status.
    pub async fn call(&self, call: ToolCall) -> ToolResponse {
        info!(tool = %call.name, "Handling tool call");

        match self.dispatch(&call).await {
            Ok(response) => response,
            Err(e) => {
                let status = status_for(&e);
                error!(tool = %call.name, status, error = %e, "Tool call failed");
                ToolResponse::failure(status, e.to_string())
            }
        }
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<ToolResponse> {
        match call.name.as_str() {
            EXTRACT_CLAIMS => {
                let input: ExtractClaimsInput = arguments(call)?;
                let claims = self.extractor.extract(&input.text).await?;
                ToolResponse::value(&claims)
            }
            CHECK_CLAIM => {
                let input: CheckClaimInput = arguments(call)?;
                let outcome = self.wikidata.check(&input.statement).await;
                ToolResponse::value(&outcome)
            }
            GENERATE_POST => {
                let input: GeneratePostInput = arguments(call)?;
                let ack = self.posts.publish(&input).await?;
                ToolResponse::value(&ack)
            }
            other => Err(FactCheckError::Tool {
                status: 404,
                message: format!("Unknown tool: {}", other),
            }),
        }
    }
}

fn arguments<T: DeserializeOwned>(call: &ToolCall) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(call.arguments.clone())).map_err(|e| {
        FactCheckError::InvalidInput(format!("Invalid arguments for {}: {}", call.name, e))
    })
}

/// HTTP-style status for a failed call.
fn status_for(error: &FactCheckError) -> u16 {
    match error {
        FactCheckError::Tool { status, .. } => *status,
        FactCheckError::InvalidInput(_) => 400,
        FactCheckError::Transport(_) => 502,
        _ => 500,
    }
}

/// Create the tool server router.
pub fn create_router(server: Arc<ToolServer>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_tools(State(server): State<Arc<ToolServer>>) -> Json<Vec<ToolInfo>> {
    Json(server.catalog())
}

async fn call_tool(
    State(server): State<Arc<ToolServer>>,
    Json(call): Json<ToolCall>,
) -> (StatusCode, Json<ToolResponse>) {
    let response = server.call(call).await;
    let status = response
        .error
        .as_ref()
        .and_then(|failure| StatusCode::from_u16(failure.status).ok())
        .unwrap_or(StatusCode::OK);

    (status, Json(response))
}
