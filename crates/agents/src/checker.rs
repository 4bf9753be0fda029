//! Fact checker agent - verifies each claim against the knowledge base tool.

use async_trait::async_trait;
use factcheck_common::tool::CHECK_CLAIM;
use factcheck_common::{CheckOutcome, ClaimRecord, Message, MessageHandler, Result, ToolClient};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

const CHECKER_DESCRIPTION: &str = "Please send a JSON array of claims as plain text.";

const UNSPECIFIED_ERROR: &str = "check_claim reported an unspecified error";

/// Checks claims one at a time, in input order.
pub struct FactCheckerAgent {
    tools: Arc<dyn ToolClient>,
}

impl FactCheckerAgent {
    pub fn new(tools: Arc<dyn ToolClient>) -> Self {
        Self { tools }
    }

    /// Produce exactly one record per claim, in order. Never fails.
    pub async fn check_claims(&self, claims: &[String]) -> Vec<ClaimRecord> {
        let mut records = Vec::with_capacity(claims.len());
        for claim in claims {
            records.push(self.check_one(claim).await);
        }
        records
    }

    async fn check_one(&self, claim: &str) -> ClaimRecord {
        let outcome = match self.tools.call(CHECK_CLAIM, json!({ "statement": claim })).await {
            Ok(response) => response.parse::<CheckOutcome>(),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(CheckOutcome::Checked { verified, source }) => {
                debug!(claim, verified, "Claim checked");
                ClaimRecord::checked(claim, verified, source)
            }
            Ok(CheckOutcome::Failed { error }) => {
                let error = if error.is_empty() {
                    UNSPECIFIED_ERROR.to_string()
                } else {
                    error
                };
                warn!(claim, error = %error, "Claim check reported an error");
                ClaimRecord::failed(claim, error)
            }
            Err(e) => {
                warn!(claim, error = %e, "Claim check failed");
                ClaimRecord::failed(claim, e.to_string())
            }
        }
    }
}

#[async_trait]
impl MessageHandler for FactCheckerAgent {
    fn name(&self) -> &str {
        "checker"
    }

    fn description(&self) -> &str {
        CHECKER_DESCRIPTION
    }

    async fn handle_message(&self, message: &Message) -> Result<Message> {
        let Some(text) = message.text() else {
            return Ok(message.reply_text(CHECKER_DESCRIPTION));
        };

        let claims: Vec<String> = match serde_json::from_str(text) {
            Ok(claims) => claims,
            Err(e) => return Ok(message.reply_error(format!("Invalid JSON input: {}", e))),
        };

        let records = self.check_claims(&claims).await;
        info!(
            agent = %self.name(),
            claims = records.len(),
            failed = records.iter().filter(|r| r.has_error()).count(),
            "Checked claims"
        );

        Ok(message.reply_text(serde_json::to_string_pretty(&records)?))
    }
}
