//! The fact-check orchestrator.
//!
//! One recognized trigger message fans out into four sequential stage
//! calls. Each stage's reply text becomes the next stage's request text.
//! The first failure abandons the run.

use crate::agent_client::HttpAgentClient;
use crate::config::PipelineConfig;
use async_trait::async_trait;
use factcheck_common::{AgentClient, Content, FactCheckError, Message, MessageHandler, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Trigger texts, compared after trimming and lower-casing.
pub const START_KEYWORDS: &[&str] = &["start", "run", "pipeline", "run pipeline"];

/// Request text sent to the crawler.
pub const CRAWL_REQUEST: &str = "start";

pub const HELP_TEXT: &str = "Type `start` to run the fact-checking pipeline.";
pub const SUCCESS_BANNER: &str = "✅ Pipeline complete:\n\n";
pub const FAILURE_BANNER: &str = "❌ Error in pipeline: ";

const ORCHESTRATOR_DESCRIPTION: &str =
    "Orchestrates the crawler → extractor → checker → publisher fact-checking pipeline.";

/// A pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Crawler,
    Extractor,
    Checker,
    Publisher,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Crawler, Stage::Extractor, Stage::Checker, Stage::Publisher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Crawler => "crawler",
            Stage::Extractor => "extractor",
            Stage::Checker => "checker",
            Stage::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clients for the four stage agents.
#[derive(Clone)]
pub struct PipelineStages {
    pub crawler: Arc<dyn AgentClient>,
    pub extractor: Arc<dyn AgentClient>,
    pub checker: Arc<dyn AgentClient>,
    pub publisher: Arc<dyn AgentClient>,
}

impl PipelineStages {
    /// HTTP clients for the configured agent addresses.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            crawler: Arc::new(HttpAgentClient::new(&config.crawler)),
            extractor: Arc::new(HttpAgentClient::new(&config.extractor)),
            checker: Arc::new(HttpAgentClient::new(&config.checker)),
            publisher: Arc::new(HttpAgentClient::new(&config.publisher)),
        }
    }

    fn client(&self, stage: Stage) -> &Arc<dyn AgentClient> {
        match stage {
            Stage::Crawler => &self.crawler,
            Stage::Extractor => &self.extractor,
            Stage::Checker => &self.checker,
            Stage::Publisher => &self.publisher,
        }
    }
}

/// Reply text produced by one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Outputs of one completed run. Not retained after the reply is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub outputs: Vec<StageOutput>,
}

impl PipelineRun {
    /// The publisher's reply text.
    pub fn final_text(&self) -> &str {
        self.outputs.last().map(|o| o.text.as_str()).unwrap_or_default()
    }
}

/// Whether `text` starts a pipeline run.
pub fn is_trigger(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    START_KEYWORDS.contains(&normalized.as_str())
}

/// Runs the fixed crawler → extractor → checker → publisher sequence.
pub struct Orchestrator {
    stages: PipelineStages,
}

impl Orchestrator {
    pub fn new(stages: PipelineStages) -> Self {
        Self { stages }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(PipelineStages::from_config(config))
    }

    /// Execute all four stages for one trigger.
    ///
    /// Stages run strictly one after another; the first failure is returned
    /// and later stages are never called.
    pub async fn run_pipeline(&self, trigger: &Message) -> Result<PipelineRun> {
        let conversation = trigger.conversation_id.clone();
        let mut outputs = Vec::with_capacity(Stage::ALL.len());
        let mut text = CRAWL_REQUEST.to_string();

        for stage in Stage::ALL {
            info!(stage = %stage, conversation_id = ?conversation, "Running stage");

            let request = Message::user(text).in_conversation(conversation.clone());
            text = self.call_stage(stage, &request).await?;

            debug!(stage = %stage, output = %text, "Stage finished");
            outputs.push(StageOutput {
                stage,
                text: text.clone(),
            });
        }

        Ok(PipelineRun { outputs })
    }

    async fn call_stage(&self, stage: Stage, request: &Message) -> Result<String> {
        let stage_error = |message: String| FactCheckError::Stage {
            stage: stage.to_string(),
            message,
        };

        let reply = self
            .stages
            .client(stage)
            .send_message(request)
            .await
            .map_err(|e| stage_error(e.to_string()))?;

        match reply.content {
            Content::Text { text } => Ok(text),
            Content::Error { message } => Err(stage_error(message)),
            Content::Data { .. } => Err(stage_error("reply is not text".into())),
        }
    }
}

#[async_trait]
impl MessageHandler for Orchestrator {
    fn name(&self) -> &str {
        "orchestrator"
    }

    fn description(&self) -> &str {
        ORCHESTRATOR_DESCRIPTION
    }

    async fn handle_message(&self, message: &Message) -> Result<Message> {
        let Some(text) = message.text().filter(|t| is_trigger(t)) else {
            return Ok(message.reply_text(HELP_TEXT));
        };

        info!(trigger = %text.trim(), message_id = %message.message_id, "Starting pipeline run");

        match self.run_pipeline(message).await {
            Ok(run) => {
                info!(message_id = %message.message_id, "Pipeline complete");
                Ok(message.reply_text(format!("{}{}", SUCCESS_BANNER, run.final_text())))
            }
            Err(e) => {
                error!(message_id = %message.message_id, error = %e, "Pipeline failed");
                Ok(message.reply_text(format!("{}{}", FAILURE_BANNER, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_keywords() {
        for text in ["start", "RUN", "  Pipeline\n", "run pipeline", "Run Pipeline "] {
            assert!(is_trigger(text), "{text:?} should trigger");
        }
        for text in ["", "hello", "start now", "run  pipeline", "begin"] {
            assert!(!is_trigger(text), "{text:?} should not trigger");
        }
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<_> = Stage::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["crawler", "extractor", "checker", "publisher"]);
    }

    #[test]
    fn test_final_text() {
        let run = PipelineRun {
            outputs: vec![
                StageOutput {
                    stage: Stage::Crawler,
                    text: "[]".into(),
                },
                StageOutput {
                    stage: Stage::Publisher,
                    text: "Published 0 claims".into(),
                },
            ],
        };
        assert_eq!(run.final_text(), "Published 0 claims");
        assert_eq!(PipelineRun { outputs: vec![] }.final_text(), "");
    }
}
