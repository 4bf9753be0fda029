//! Extractor agent - turns article text into standalone factual claims.

use async_trait::async_trait;
use factcheck_common::tool::EXTRACT_CLAIMS;
use factcheck_common::{Message, MessageHandler, Result, ToolClient};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const EXTRACTOR_DESCRIPTION: &str = "Please send plain text to extract factual claims.";

/// Forwards text to the `extract_claims` tool and replies with a JSON array of claims.
pub struct ExtractorAgent {
    tools: Arc<dyn ToolClient>,
}

impl ExtractorAgent {
    pub fn new(tools: Arc<dyn ToolClient>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl MessageHandler for ExtractorAgent {
    fn name(&self) -> &str {
        "extractor"
    }

    fn description(&self) -> &str {
        EXTRACTOR_DESCRIPTION
    }

    async fn handle_message(&self, message: &Message) -> Result<Message> {
        let Some(text) = message.text() else {
            return Ok(message.reply_text(EXTRACTOR_DESCRIPTION));
        };

        let response = self
            .tools
            .call(EXTRACT_CLAIMS, json!({ "text": text.trim() }))
            .await?;
        let claims: Vec<String> = response.parse()?;

        info!(agent = %self.name(), claims = claims.len(), "Extracted claims");
        Ok(message.reply_text(serde_json::to_string_pretty(&claims)?))
    }
}
