//! Core agent traits.
//!
//! These traits are defined in `factcheck-common` so that the agents, the
//! coordinator and the server crate can reference them without circular
//! dependencies. A stage agent composes the two narrow seams: it serves
//! messages through [`MessageHandler`] and reaches its tool through a
//! [`ToolClient`] it holds.

use crate::{Message, Result, ToolCall, ToolResponse};
use async_trait::async_trait;
use tracing::error;

/// Inbound side: an addressable component that answers one message.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Short identifier used in logs and error replies.
    fn name(&self) -> &str;

    /// Human-readable capability description.
    fn description(&self) -> &str;

    /// Handle one message. Errors are converted into replies by [`respond`](Self::respond).
    async fn handle_message(&self, message: &Message) -> Result<Message>;

    /// Handle one message and never fail: any error becomes an error reply.
    async fn respond(&self, message: &Message) -> Message {
        match self.handle_message(message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(agent = %self.name(), message_id = %message.message_id, error = %e, "Request failed");
                message.reply_error(format!("[{} error] {}", self.name(), e))
            }
        }
    }
}

/// Outbound side: a client for a Tool Endpoint server.
#[async_trait]
pub trait ToolClient: Send + Sync {
    /// Send a raw tool call. An error response is returned as `Ok`.
    async fn call_tool(&self, call: ToolCall) -> Result<ToolResponse>;

    /// Call a tool by name; error responses become `Err`.
    async fn call(&self, name: &str, arguments: serde_json::Value) -> Result<ToolResponse> {
        self.call_tool(ToolCall::new(name, arguments))
            .await?
            .into_result()
    }
}

/// A client for a remote (or in-process) agent.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Where the agent lives, for logs.
    fn endpoint(&self) -> &str;

    /// Send a message and wait for the reply.
    async fn send_message(&self, message: &Message) -> Result<Message>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FactCheckError, ToolContent};

    struct Failing;

    #[async_trait]
    impl MessageHandler for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        async fn handle_message(&self, _message: &Message) -> Result<Message> {
            Err(FactCheckError::Agent("boom".into()))
        }
    }

    struct StaticTool(ToolResponse);

    #[async_trait]
    impl ToolClient for StaticTool {
        async fn call_tool(&self, _call: ToolCall) -> Result<ToolResponse> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_respond_converts_error_into_reply() {
        let request = Message::user("anything");
        let reply = Failing.respond(&request).await;

        assert!(reply.is_error());
        assert_eq!(reply.parent_message_id.as_deref(), Some(request.message_id.as_str()));
        assert!(reply.display_text().contains("[failing error]"));
        assert!(reply.display_text().contains("boom"));
    }

    #[tokio::test]
    async fn test_call_surfaces_tool_failure() {
        let tool = StaticTool(ToolResponse::failure(500, "down"));
        let err = tool.call("check_claim", serde_json::json!({})).await.unwrap_err();

        assert!(matches!(err, FactCheckError::Tool { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_call_passes_success_through() {
        let tool = StaticTool(ToolResponse::text("[]"));
        let response = tool.call("extract_claims", serde_json::json!({"text": "t"})).await.unwrap();

        assert_eq!(response.content, vec![ToolContent::Text { text: "[]".into() }]);
    }
}
