//! Configuration for a served pipeline component.
//!
//! One TOML file shape serves every role; each role reads the sections it
//! needs and ignores the rest.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5003
//!
//! [tools]
//! host = "localhost"
//! port = 8000
//!
//! [crawler]
//! feeds = ["https://feeds.bbci.co.uk/news/science_and_environment/rss.xml"]
//! keywords = ["climate"]
//! filter_mode = "strict"
//!
//! [pipeline]
//! checker = "http://localhost:5003/a2a"
//! ```

use clap::ValueEnum;
use factcheck_agents::{CrawlerConfig, ToolEndpointConfig};
use factcheck_common::config::load_toml;
use factcheck_common::ServerConfig;
use factcheck_coordinator::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which component a `factcheck serve` process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Crawler,
    Extractor,
    Checker,
    Publisher,
    Orchestrator,
}

impl Role {
    pub fn default_port(&self) -> u16 {
        match self {
            Role::Crawler => 5001,
            Role::Extractor => 5002,
            Role::Checker => 5003,
            Role::Publisher => 5004,
            Role::Orchestrator => 5005,
        }
    }
}

/// Configuration loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listen address; the role's default port when absent
    #[serde(default)]
    pub server: Option<ServerConfig>,

    #[serde(default)]
    pub tools: ToolEndpointConfig,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl ServiceConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        load_toml(path)
    }

    /// Listen address for `role`.
    pub fn server_for(&self, role: Role) -> ServerConfig {
        self.server
            .clone()
            .unwrap_or_else(|| ServerConfig::new("127.0.0.1", role.default_port()))
    }
}
