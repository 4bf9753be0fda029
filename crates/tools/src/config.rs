//! Tool server configuration.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [llm]
//! model = "llama3-8b-8192"
//! temperature = 0.2
//!
//! [wikidata]
//! language = "en"
//!
//! [posts]
//! site_dir = "jekyll_site"
//! build_command = ["jekyll", "build"]
//! ```

use factcheck_common::config::load_toml;
use factcheck_common::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable holding the chat completions API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub wikidata: WikidataConfig,

    #[serde(default)]
    pub posts: PostsConfig,
}

fn default_server() -> ServerConfig {
    ServerConfig::new("127.0.0.1", 8000)
}

impl Default for ToolServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            llm: LlmConfig::default(),
            wikidata: WikidataConfig::default(),
            posts: PostsConfig::default(),
        }
    }
}

impl ToolServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config: Self = load_toml(path)?;
        if config.llm.api_key.is_some() {
            warn!(
                "API key found in config file. Prefer setting {} in the environment.",
                API_KEY_ENV
            );
        }
        Ok(config)
    }
}

/// OpenAI-compatible chat completions endpoint used by `extract_claims`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Falls back to `GROQ_API_KEY` when absent
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1".into()
}

fn default_model() -> String {
    "llama3-8b-8192".into()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// The configured key, or the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikidataConfig {
    #[serde(default = "default_wikidata_api")]
    pub api_url: String,

    /// Prefix for entity pages returned as the claim source
    #[serde(default = "default_entity_url")]
    pub entity_url: String,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_lookup_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_wikidata_api() -> String {
    "https://www.wikidata.org/w/api.php".into()
}

fn default_entity_url() -> String {
    "https://www.wikidata.org/wiki".into()
}

fn default_language() -> String {
    "en".into()
}

fn default_lookup_timeout_secs() -> u64 {
    15
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            api_url: default_wikidata_api(),
            entity_url: default_entity_url(),
            language: default_language(),
            timeout_secs: default_lookup_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    /// Site root; posts go to `<site_dir>/_posts`
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,

    /// Program and arguments run in `site_dir` after each post. Empty skips the build.
    #[serde(default)]
    pub build_command: Vec<String>,
}

fn default_site_dir() -> PathBuf {
    PathBuf::from("jekyll_site")
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            build_command: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolServerConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.llm.model, "llama3-8b-8192");
        assert!((config.llm.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.wikidata.language, "en");
        assert_eq!(config.posts.site_dir, PathBuf::from("jekyll_site"));
        assert!(config.posts.build_command.is_empty());
    }

    #[test]
    fn test_partial_toml() {
        let config: ToolServerConfig = toml::from_str(
            r#"
[server]
port = 9000

[posts]
site_dir = "/srv/site"
build_command = ["jekyll", "build"]
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.posts.site_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.posts.build_command, vec!["jekyll", "build"]);
        assert_eq!(config.llm.api_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_configured_key_wins() {
        let llm = LlmConfig {
            api_key: Some("gsk-test".into()),
            ..Default::default()
        };
        assert_eq!(llm.resolve_api_key().as_deref(), Some("gsk-test"));

        let blank = LlmConfig {
            api_key: Some("  ".into()),
            ..Default::default()
        };
        assert!(blank.resolve_api_key().is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        std::fs::write(&path, "[wikidata]\nlanguage = \"de\"\n").unwrap();

        let config = ToolServerConfig::from_file(&path).unwrap();
        assert_eq!(config.wikidata.language, "de");
    }
}
