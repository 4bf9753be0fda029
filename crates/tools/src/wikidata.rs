//! `check_claim`: Wikidata entity search.

use crate::config::WikidataConfig;
use factcheck_common::{CheckOutcome, FactCheckError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: String,
}

pub struct WikidataClient {
    config: WikidataConfig,
    http_client: reqwest::Client,
}

impl WikidataClient {
    pub fn new(config: WikidataConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("factcheck-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FactCheckError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn entity_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.entity_url.trim_end_matches('/'), id)
    }

    /// Check one statement. Lookup failures are reported inside the outcome.
    pub async fn check(&self, statement: &str) -> CheckOutcome {
        match self.search(statement).await {
            Ok(Some(id)) => CheckOutcome::Checked {
                verified: true,
                source: self.entity_url(&id),
            },
            Ok(None) => CheckOutcome::Checked {
                verified: false,
                source: String::new(),
            },
            Err(e) => {
                warn!(statement = %statement, error = %e, "Wikidata lookup failed");
                CheckOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Id of the first matching entity, if any.
    async fn search(&self, statement: &str) -> Result<Option<String>> {
        let response = self
            .http_client
            .get(&self.config.api_url)
            .query(&[
                ("action", "wbsearchentities"),
                ("search", statement),
                ("language", self.config.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| FactCheckError::Transport(format!("Wikidata request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactCheckError::Tool {
                status: 502,
                message: format!("Wikidata returned {}", status),
            });
        }

        let results: SearchResponse = response.json().await.map_err(|e| FactCheckError::Tool {
            status: 502,
            message: format!("Failed to parse Wikidata response: {}", e),
        })?;

        let first = results.search.into_iter().next().map(|hit| hit.id);
        debug!(statement = %statement, entity = ?first, "Wikidata search finished");
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_url() {
        let client = WikidataClient::new(WikidataConfig::default()).unwrap();
        assert_eq!(client.entity_url("Q42"), "https://www.wikidata.org/wiki/Q42");
    }

    #[test]
    fn test_search_response_without_hits() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"searchinfo": {}}"#).unwrap();
        assert!(parsed.search.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_lookup_is_reported_inline() {
        let client = WikidataClient::new(WikidataConfig {
            api_url: "http://127.0.0.1:9/w/api.php".into(),
            timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();

        match client.check("Water boils at 100C").await {
            CheckOutcome::Failed { error } => assert!(!error.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
