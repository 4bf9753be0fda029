//! Configuration for the stage agents.

use serde::{Deserialize, Serialize};

/// Where the Tool Endpoint server lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEndpointConfig {
    #[serde(default = "default_tool_host")]
    pub host: String,

    #[serde(default = "default_tool_port")]
    pub port: u16,
}

fn default_tool_host() -> String {
    "localhost".into()
}

fn default_tool_port() -> u16 {
    8000
}

impl Default for ToolEndpointConfig {
    fn default() -> Self {
        Self {
            host: default_tool_host(),
            port: default_tool_port(),
        }
    }
}

impl ToolEndpointConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// How the crawler applies its include/exclude/keyword lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Exclusions reject, inclusions and keywords must match when configured.
    #[default]
    Strict,
    /// Every entry qualifies; the lists are ignored.
    PassThrough,
}

/// Category lists matched against entry title and summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Crawler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Feed URLs, fetched in order
    #[serde(default)]
    pub feeds: Vec<String>,

    #[serde(default)]
    pub categories: CategoryFilter,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub filter_mode: FilterMode,

    /// Number of qualifying entries returned per run
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,

    /// Per-feed HTTP timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_max_articles() -> usize {
    5
}

fn default_fetch_timeout() -> u64 {
    15
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            feeds: Vec::new(),
            categories: CategoryFilter::default(),
            keywords: Vec::new(),
            filter_mode: FilterMode::default(),
            max_articles: default_max_articles(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}
