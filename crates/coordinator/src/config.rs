//! Configuration for the orchestrator.

use serde::{Deserialize, Serialize};

/// Addresses of the four stage agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_crawler")]
    pub crawler: String,

    #[serde(default = "default_extractor")]
    pub extractor: String,

    #[serde(default = "default_checker")]
    pub checker: String,

    #[serde(default = "default_publisher")]
    pub publisher: String,
}

fn default_crawler() -> String {
    "http://localhost:5001/a2a".into()
}

fn default_extractor() -> String {
    "http://localhost:5002/a2a".into()
}

fn default_checker() -> String {
    "http://localhost:5003/a2a".into()
}

fn default_publisher() -> String {
    "http://localhost:5004/a2a".into()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            crawler: default_crawler(),
            extractor: default_extractor(),
            checker: default_checker(),
            publisher: default_publisher(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"checker": "http://checker.internal/a2a"}"#).unwrap();

        assert_eq!(config.checker, "http://checker.internal/a2a");
        assert_eq!(config.crawler, "http://localhost:5001/a2a");
        assert_eq!(config.publisher, "http://localhost:5004/a2a");
    }
}
