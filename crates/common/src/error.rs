//! Error types for the fact-check pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactCheckError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("{stage} stage failed: {message}")]
    Stage { stage: String, message: String },

    #[error("Tool error ({status}): {message}")]
    Tool { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FactCheckError>;
