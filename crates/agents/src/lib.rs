//! The four stage agents of the fact-check pipeline.
//!
//! - **Crawler**: pulls and filters articles from RSS/Atom feeds
//! - **Extractor**: turns article text into claims via `extract_claims`
//! - **Checker**: verifies each claim via `check_claim`
//! - **Publisher**: renders checked claims via `generate_post`
//!
//! Each agent serves messages through [`MessageHandler`] and, except for the
//! crawler, reaches exactly one Tool Endpoint through the [`ToolClient`] it
//! is constructed with.
//!
//! ```text
//! text ─► [Crawler] ─► articles ─► [Extractor] ─► claims ─► [Checker] ─► records ─► [Publisher]
//!            │                         │                        │                       │
//!          feeds               extract_claims              check_claim            generate_post
//! ```
//!
//! [`MessageHandler`]: factcheck_common::MessageHandler
//! [`ToolClient`]: factcheck_common::ToolClient

pub mod checker;
pub mod config;
pub mod crawler;
pub mod extractor;
pub mod feed;
pub mod publisher;
pub mod tool_client;

pub use checker::FactCheckerAgent;
pub use config::{CategoryFilter, CrawlerConfig, FilterMode, ToolEndpointConfig};
pub use crawler::CrawlerAgent;
pub use extractor::ExtractorAgent;
pub use feed::{FeedEntry, FeedSource, HttpFeedSource};
pub use publisher::{PublishSummary, PublisherAgent};
pub use tool_client::HttpToolClient;
