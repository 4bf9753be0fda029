//! Clients for reaching stage agents.
//!
//! [`HttpAgentClient`] posts messages to an agent served over HTTP;
//! [`InProcessAgentClient`] calls a handler living in the same process.

use async_trait::async_trait;
use factcheck_common::{AgentClient, FactCheckError, Message, MessageHandler, Result};
use std::sync::Arc;
use tracing::debug;

/// Sends messages with `POST <endpoint>` and decodes the reply message.
pub struct HttpAgentClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAgentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_message(&self, message: &Message) -> Result<Message> {
        debug!(endpoint = %self.endpoint, message_id = %message.message_id, "Sending message");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| FactCheckError::Transport(format!("{} unreachable: {}", self.endpoint, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FactCheckError::Transport(format!(
                "{} returned {}: {}",
                self.endpoint, status, body
            )));
        }

        resp.json::<Message>()
            .await
            .map_err(|e| FactCheckError::Transport(format!("Invalid reply from {}: {}", self.endpoint, e)))
    }
}

/// Delivers messages directly to a handler in this process.
pub struct InProcessAgentClient {
    handler: Arc<dyn MessageHandler>,
    endpoint: String,
}

impl InProcessAgentClient {
    pub fn new(handler: Arc<dyn MessageHandler>) -> Self {
        let endpoint = format!("in-process://{}", handler.name());
        Self { handler, endpoint }
    }
}

#[async_trait]
impl AgentClient for InProcessAgentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_message(&self, message: &Message) -> Result<Message> {
        Ok(self.handler.respond(message).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl MessageHandler for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes text"
        }

        async fn handle_message(&self, message: &Message) -> Result<Message> {
            Ok(message.reply_text(message.display_text()))
        }
    }

    #[tokio::test]
    async fn test_in_process_client() {
        let client = InProcessAgentClient::new(Arc::new(Echo));
        let request = Message::user("ping");
        let reply = client.send_message(&request).await.unwrap();

        assert_eq!(client.endpoint(), "in-process://echo");
        assert_eq!(reply.text(), Some("ping"));
        assert_eq!(reply.parent_message_id.as_deref(), Some(request.message_id.as_str()));
    }

    #[tokio::test]
    async fn test_http_client_unreachable() {
        let client = HttpAgentClient::new("http://127.0.0.1:9/a2a");
        let err = client.send_message(&Message::user("start")).await.unwrap_err();

        assert!(matches!(err, FactCheckError::Transport(_)));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
