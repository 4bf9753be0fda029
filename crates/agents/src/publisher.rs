//! Publisher agent - renders verified claims as posts.

use async_trait::async_trait;
use factcheck_common::tool::GENERATE_POST;
use factcheck_common::{ClaimRecord, Message, MessageHandler, PostAck, Result, ToolClient};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

const PUBLISHER_DESCRIPTION: &str =
    "Please send a list of claims with 'statement', 'verified', and 'source'.";

/// Counts from one publish request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub published: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PublishSummary {
    pub fn render(&self) -> String {
        format!(
            "Published {} claims ({} skipped, {} failed).",
            self.published, self.skipped, self.failed
        )
    }
}

/// Calls `generate_post` for every record without an `error`.
pub struct PublisherAgent {
    tools: Arc<dyn ToolClient>,
}

impl PublisherAgent {
    pub fn new(tools: Arc<dyn ToolClient>) -> Self {
        Self { tools }
    }

    /// Publish records sequentially. A failing record never stops the rest.
    pub async fn publish(&self, records: &[ClaimRecord]) -> PublishSummary {
        let mut summary = PublishSummary::default();
        for record in records {
            self.publish_record(record, &mut summary).await;
        }
        summary
    }

    /// Publish raw JSON items as received on the wire.
    ///
    /// An item carrying an `error` key is skipped, even when its value is
    /// `null`. An item that does not decode as a claim record counts as failed.
    pub async fn publish_items(&self, items: &[serde_json::Value]) -> PublishSummary {
        let mut summary = PublishSummary::default();

        for item in items {
            if item.get("error").is_some() {
                summary.skipped += 1;
                continue;
            }

            match serde_json::from_value::<ClaimRecord>(item.clone()) {
                Ok(record) => self.publish_record(&record, &mut summary).await,
                Err(e) => {
                    warn!(item = %item, error = %e, "Malformed claim record");
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    async fn publish_record(&self, record: &ClaimRecord, summary: &mut PublishSummary) {
        if record.has_error() {
            summary.skipped += 1;
            return;
        }

        let arguments = json!({
            "statement": record.statement,
            "verified": record.verified,
            "source": record.source,
        });

        let ack = match self.tools.call(GENERATE_POST, arguments).await {
            Ok(response) => response.parse::<PostAck>(),
            Err(e) => Err(e),
        };

        match ack {
            Ok(ack) if ack.is_published() => summary.published += 1,
            Ok(ack) => {
                warn!(statement = %record.statement, status_code = ack.status_code, "Unexpected acknowledgement");
                summary.failed += 1;
            }
            Err(e) => {
                warn!(statement = %record.statement, error = %e, "Publish call failed");
                summary.failed += 1;
            }
        }
    }
}

#[async_trait]
impl MessageHandler for PublisherAgent {
    fn name(&self) -> &str {
        "publisher"
    }

    fn description(&self) -> &str {
        PUBLISHER_DESCRIPTION
    }

    async fn handle_message(&self, message: &Message) -> Result<Message> {
        let Some(text) = message.text() else {
            return Ok(message.reply_text(PUBLISHER_DESCRIPTION));
        };

        let items: Vec<serde_json::Value> = match serde_json::from_str(text) {
            Ok(items) => items,
            Err(e) => return Ok(message.reply_error(format!("Invalid JSON input: {}", e))),
        };

        let summary = self.publish_items(&items).await;
        info!(
            agent = %self.name(),
            published = summary.published,
            skipped = summary.skipped,
            failed = summary.failed,
            "Publish finished"
        );

        Ok(message.reply_text(summary.render()))
    }
}
