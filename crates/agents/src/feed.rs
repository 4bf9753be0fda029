//! RSS/Atom feed access for the crawler.

use async_trait::async_trait;
use factcheck_common::{FactCheckError, Result};
use std::time::Duration;
use tracing::debug;

/// One entry of a parsed feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// RFC 3339 timestamp, when the feed provides one
    pub published: Option<String>,
}

/// A source of feed entries, addressed by feed URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<FeedEntry>>;
}

/// Fetches feeds over HTTP and parses them with `feed-rs`.
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FactCheckError::Config(format!("Failed to build feed HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<FeedEntry>> {
        let resp = self
            .client
            .get(feed_url)
            .header("User-Agent", concat!("factcheck-crawler/", env!("CARGO_PKG_VERSION")))
            .send()
            .await
            .map_err(|e| FactCheckError::Feed(format!("{}: fetch failed: {}", feed_url, e)))?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FactCheckError::Feed(format!("{}: failed to read body: {}", feed_url, e)))?;

        let entries = parse_feed(&bytes)
            .map_err(|e| FactCheckError::Feed(format!("{}: {}", feed_url, e)))?;

        debug!(feed_url, entries = entries.len(), "Parsed feed");
        Ok(entries)
    }
}

/// Parse RSS, Atom or JSON Feed bytes into entries.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = feed_rs::parser::parse(bytes)
        .map_err(|e| FactCheckError::Feed(format!("failed to parse feed: {}", e)))?;

    Ok(feed
        .entries
        .into_iter()
        .map(|entry| {
            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default();

            FeedEntry {
                title: entry.title.map(|t| t.content).unwrap_or_default(),
                link: entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default(),
                summary,
                published: entry.published.or(entry.updated).map(|dt| dt.to_rfc3339()),
            }
        })
        .collect())
}
