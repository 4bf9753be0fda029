//! Records carried as JSON inside message text.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A news article produced by the crawler stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// SHA-256 of `title + link`, stable across runs
    pub id: String,
    pub title: String,
    pub link: String,
    pub content: String,
    pub published: String,
    /// Feed URL the article came from
    pub source: String,
}

impl ArticleRecord {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        content: impl Into<String>,
        published: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let link = link.into();
        Self {
            id: article_id(&title, &link),
            title,
            link,
            content: content.into(),
            published: published.into(),
            source: source.into(),
        }
    }
}

/// Deduplication identity of an article.
pub fn article_id(title: &str, link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(link.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verification result for one factual statement.
///
/// Either `verified`/`source` are meaningful, or `error` is set and the
/// publisher skips the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub statement: String,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClaimRecord {
    pub fn checked(statement: impl Into<String>, verified: bool, source: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            verified,
            source: source.into(),
            error: None,
        }
    }

    pub fn failed(statement: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            verified: false,
            source: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_is_deterministic() {
        let a = ArticleRecord::new("Title", "https://a.example/1", "x", "now", "feed");
        let b = ArticleRecord::new("Title", "https://a.example/1", "y", "later", "other");

        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 64);
        assert_ne!(a.id, article_id("Title", "https://a.example/2"));
    }

    #[test]
    fn test_checked_claim_omits_error_key() {
        let record = ClaimRecord::checked("Water boils at 100C", true, "https://example.org/Q1");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["verified"], true);
        assert_eq!(json["source"], "https://example.org/Q1");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_claim_encoding() {
        let record = ClaimRecord::failed("The moon is cheese", "lookup timed out");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["verified"], false);
        assert_eq!(json["source"], "");
        assert_eq!(json["error"], "lookup timed out");
        assert!(record.has_error());
    }

    #[test]
    fn test_partial_claim_decodes_with_defaults() {
        let record: ClaimRecord = serde_json::from_str(r#"{"statement": "s"}"#).unwrap();

        assert!(!record.verified);
        assert!(record.source.is_empty());
        assert!(!record.has_error());
    }
}
