//! `extract_claims`: LLM-based claim extraction over an OpenAI-compatible API.

use crate::config::{LlmConfig, API_KEY_ENV};
use factcheck_common::{FactCheckError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info};

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant trained to extract factual claims from news articles.";

// First `[` through last `]`, across lines.
static JSON_ARRAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

fn user_prompt(text: &str) -> String {
    format!(
        "Extract a list of concise, standalone factual claims from the following article.\n\
         Return only the claims in JSON array format.\n\n\
         Article:\n\"\"\"\n{}\n\"\"\"",
        text
    )
}

/// Decode the claim list from a completion.
///
/// The whole completion is tried first, then the outermost bracketed span.
pub fn parse_claims(output: &str) -> Result<Vec<String>> {
    if let Ok(claims) = serde_json::from_str::<Vec<String>>(output.trim()) {
        return Ok(claims);
    }

    let span = JSON_ARRAY_PATTERN
        .find(output)
        .ok_or_else(|| FactCheckError::Tool {
            status: 500,
            message: format!("No JSON array in model output: {}", output),
        })?;

    serde_json::from_str(span.as_str()).map_err(|e| FactCheckError::Tool {
        status: 500,
        message: format!("Error parsing claims: {} (output: {})", e, output),
    })
}

/// Calls the chat completions endpoint and decodes the claims it returns.
pub struct ClaimExtractor {
    config: LlmConfig,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl ClaimExtractor {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FactCheckError::Config(format!("Failed to build HTTP client: {}", e)))?;
        let api_key = config.resolve_api_key();

        Ok(Self {
            config,
            api_key,
            http_client,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn extract(&self, text: &str) -> Result<Vec<String>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            FactCheckError::Config(format!("{} not found in environment", API_KEY_ENV))
        })?;

        info!(model = %self.config.model, chars = text.len(), "Extracting claims");

        let url = format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'));
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: user_prompt(text),
                },
            ],
            temperature: self.config.temperature,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| FactCheckError::Transport(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(FactCheckError::Tool {
                status: 502,
                message: format!("Completion API error {}: {}", status, body_text),
            });
        }

        let completion: ChatResponse = response.json().await.map_err(|e| FactCheckError::Tool {
            status: 502,
            message: format!("Failed to parse completion response: {}", e),
        })?;

        let output = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| FactCheckError::Tool {
                status: 502,
                message: "No choices in completion response".into(),
            })?;

        debug!(output = %output, "Raw model output");
        let claims = parse_claims(&output)?;
        info!(claims = claims.len(), "Claims extracted");

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let claims = parse_claims("[\"Water boils at 100C\", \"Ice is cold\"]").unwrap();
        assert_eq!(claims, vec!["Water boils at 100C", "Ice is cold"]);
    }

    #[test]
    fn test_parse_array_in_prose() {
        let output = "Here are the claims:\n[\n  \"A\",\n  \"B\"\n]\nLet me know if you need more.";
        assert_eq!(parse_claims(output).unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_failure_is_tool_error() {
        for output in ["I could not find any claims.", "[1, 2]"] {
            match parse_claims(output) {
                Err(FactCheckError::Tool { status, .. }) => assert_eq!(status, 500),
                other => panic!("unexpected result for {output:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_prompt_embeds_article() {
        let prompt = user_prompt("Water boils at 100C.");
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("\"\"\"\nWater boils at 100C.\n\"\"\""));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let extractor = ClaimExtractor {
            config: LlmConfig {
                api_url: "http://127.0.0.1:9".into(),
                ..Default::default()
            },
            api_key: None,
            http_client: reqwest::Client::new(),
        };

        let err = extractor.extract("text").await.unwrap_err();
        assert!(matches!(err, FactCheckError::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
