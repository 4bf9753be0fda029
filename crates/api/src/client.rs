//! Client side of the interactive session with the orchestrator.

use factcheck_common::{AgentClient, Message, Result};
use factcheck_coordinator::HttpAgentClient;
use std::sync::Arc;

/// Sends user lines to the orchestrator within a single conversation.
pub struct PipelineClient {
    agent: Arc<dyn AgentClient>,
    conversation_id: Option<String>,
}

impl PipelineClient {
    pub fn new(agent: Arc<dyn AgentClient>) -> Self {
        Self {
            agent,
            conversation_id: None,
        }
    }

    pub fn connect(endpoint: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpAgentClient::new(endpoint)))
    }

    pub fn endpoint(&self) -> &str {
        self.agent.endpoint()
    }

    /// Send one line and return the reply. The first message opens the conversation.
    pub async fn send(&mut self, text: &str) -> Result<Message> {
        let message = match &self.conversation_id {
            Some(id) => Message::user(text).in_conversation(Some(id.clone())),
            None => {
                let message = Message::user(text);
                self.conversation_id = message.conversation_id.clone();
                message
            }
        };

        self.agent.send_message(&message).await
    }
}

/// Whether a line ends the interactive session.
pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("  QUIT "));
        assert!(!is_exit_command("start"));
        assert!(!is_exit_command("exit now"));
    }
}
