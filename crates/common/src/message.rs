//! Message types for inter-agent communication.

use serde::{Deserialize, Serialize};

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
}

/// Payload carried by a [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// UTF-8 text. Every pipeline stage exchanges this variant.
    Text { text: String },

    /// Structured payload. Stage agents do not accept it.
    Data { data: serde_json::Value },

    /// A handled failure, reported to the caller as readable text.
    Error { message: String },
}

/// A message passed between the client, the orchestrator and the stage agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub message_id: String,

    /// Role of the sender
    pub role: MessageRole,

    /// Message payload
    pub content: Content,

    /// ID of the message this one answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_message_id: Option<String>,

    /// Groups a request and all of its replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl Message {
    /// A user message that opens a new conversation.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            message_id: new_id(),
            role: MessageRole::User,
            content: Content::Text { text: text.into() },
            parent_message_id: None,
            conversation_id: Some(new_id()),
        }
    }

    /// Place this message in an existing conversation.
    pub fn in_conversation(mut self, conversation_id: Option<String>) -> Self {
        self.conversation_id = conversation_id;
        self
    }

    /// Build an agent reply correlated to this message.
    pub fn reply(&self, content: Content) -> Self {
        Self {
            message_id: new_id(),
            role: MessageRole::Agent,
            content,
            parent_message_id: Some(self.message_id.clone()),
            conversation_id: self.conversation_id.clone(),
        }
    }

    pub fn reply_text(&self, text: impl Into<String>) -> Self {
        self.reply(Content::Text { text: text.into() })
    }

    pub fn reply_error(&self, message: impl Into<String>) -> Self {
        self.reply(Content::Error {
            message: message.into(),
        })
    }

    /// The text payload, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Text shown to a person reading this message, whatever its payload.
    pub fn display_text(&self) -> String {
        match &self.content {
            Content::Text { text } => text.clone(),
            Content::Error { message } => message.clone(),
            Content::Data { data } => data.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.content, Content::Error { .. })
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
