//! Orchestrator for the fact-check pipeline.
//!
//! The orchestrator is the only component with control flow of its own:
//! 1. Recognizes a trigger message
//! 2. Calls the four stage agents in fixed order
//! 3. Threads each reply's text into the next request
//! 4. Reports success or the first failure to the caller
//!
//! # Architecture
//!
//! ```text
//! Trigger ("start")
//!      │
//!      ▼
//! ┌─────────────────┐
//! │  Orchestrator   │
//! │  (this crate)   │
//! └────────┬────────┘
//!          │ one message per stage, strictly sequential
//!    ┌─────┴─────┬───────────┬────────────┐
//!    ▼           ▼           ▼            ▼
//! [Crawler] → [Extractor] → [Checker] → [Publisher]
//! ```

pub mod agent_client;
pub mod config;
pub mod pipeline;

pub use agent_client::{HttpAgentClient, InProcessAgentClient};
pub use config::PipelineConfig;
pub use pipeline::{
    is_trigger, Orchestrator, PipelineRun, PipelineStages, Stage, StageOutput, FAILURE_BANNER,
    HELP_TEXT, START_KEYWORDS, SUCCESS_BANNER,
};
