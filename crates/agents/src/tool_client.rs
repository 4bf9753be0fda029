//! HTTP client for the Tool Endpoint server.

use crate::config::ToolEndpointConfig;
use async_trait::async_trait;
use factcheck_common::{FactCheckError, Result, ToolCall, ToolClient, ToolResponse};
use tracing::debug;

/// Calls tools with `POST {base_url}/tools/call`.
pub struct HttpToolClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpToolClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ToolEndpointConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ToolClient for HttpToolClient {
    async fn call_tool(&self, call: ToolCall) -> Result<ToolResponse> {
        let url = format!("{}/tools/call", self.base_url);
        debug!(tool = %call.name, %url, "Calling tool endpoint");

        let resp = self
            .client
            .post(&url)
            .json(&call)
            .send()
            .await
            .map_err(|e| FactCheckError::Transport(format!("{} unreachable: {}", url, e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FactCheckError::Transport(format!("Failed to read tool response: {}", e)))?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        // Prefer the structured error body; fall back to the raw text.
        match serde_json::from_str::<ToolResponse>(&body) {
            Ok(response) if response.is_error() => Ok(response),
            _ => Ok(ToolResponse::failure(status.as_u16(), body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HttpToolClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on test machines.
        let client = HttpToolClient::new("http://127.0.0.1:9");
        let err = client
            .call_tool(ToolCall::new("extract_claims", serde_json::json!({"text": "t"})))
            .await
            .unwrap_err();

        assert!(matches!(err, FactCheckError::Transport(_)));
    }
}
