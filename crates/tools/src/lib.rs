//! Tool Endpoint server for the fact-check pipeline.
//!
//! Hosts the three tools the stage agents call over `POST /tools/call`.
//!
//! # Tools Exposed
//!
//! - `extract_claims` - Pull standalone factual claims out of article text (LLM)
//! - `check_claim` - Look a statement up in Wikidata
//! - `generate_post` - Write a claim as a static-site post and rebuild the site
//!
//! # Architecture
//!
//! ```text
//! Extractor / Checker / Publisher agents
//!        │
//!        │ POST /tools/call {name, arguments}
//!        ▼
//! ┌──────────────────────┐
//! │     Tool Server      │
//! │                      │
//! │  ┌────────────────┐  │
//! │  │ ClaimExtractor │──┼──► chat completions API
//! │  ├────────────────┤  │
//! │  │ WikidataClient │──┼──► wbsearchentities
//! │  ├────────────────┤  │
//! │  │  PostWriter    │──┼──► <site_dir>/_posts/*.md, site build
//! │  └────────────────┘  │
//! └──────────────────────┘
//! ```

pub mod config;
pub mod extract;
pub mod publish;
pub mod server;
pub mod tools;
pub mod wikidata;

pub use config::{LlmConfig, PostsConfig, ToolServerConfig, WikidataConfig};
pub use extract::ClaimExtractor;
pub use publish::PostWriter;
pub use server::{create_router, ToolServer};
pub use tools::{CheckClaimInput, ExtractClaimsInput, GeneratePostInput, ToolInfo};
pub use wikidata::WikidataClient;
