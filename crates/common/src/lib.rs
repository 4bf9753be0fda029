//! Common types and traits shared across the fact-check pipeline crates.
//!
//! This crate provides the foundational abstractions every component uses
//! to communicate: the [`Message`] exchanged between agents, the records
//! carried inside message text, the Tool Endpoint wire protocol, and the
//! two narrow interfaces a Stage Agent is composed of ([`MessageHandler`]
//! inbound, [`ToolClient`] outbound).

pub mod config;
pub mod error;
pub mod message;
pub mod records;
pub mod tool;
pub mod traits;

pub use config::ServerConfig;
pub use error::{FactCheckError, Result};
pub use message::{Content, Message, MessageRole};
pub use records::{ArticleRecord, ClaimRecord};
pub use tool::{CheckOutcome, PostAck, ToolCall, ToolContent, ToolFailure, ToolResponse};
pub use traits::{AgentClient, MessageHandler, ToolClient};
