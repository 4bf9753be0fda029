//! Crawler agent - pulls recent articles from configured feeds.

use crate::config::{CrawlerConfig, FilterMode};
use crate::feed::{FeedEntry, FeedSource, HttpFeedSource};
use async_trait::async_trait;
use factcheck_common::{ArticleRecord, Message, MessageHandler, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const CRAWLER_DESCRIPTION: &str = "I can fetch news articles from RSS feeds.";

/// Crawler agent. The request text is ignored; every request triggers a crawl.
pub struct CrawlerAgent {
    config: CrawlerConfig,
    feeds: Arc<dyn FeedSource>,
}

impl CrawlerAgent {
    pub fn new(config: CrawlerConfig, feeds: Arc<dyn FeedSource>) -> Self {
        Self { config, feeds }
    }

    /// Crawler backed by HTTP feed fetching.
    pub fn with_http_feeds(config: CrawlerConfig) -> Result<Self> {
        let feeds = HttpFeedSource::new(Duration::from_secs(config.fetch_timeout_secs))?;
        Ok(Self::new(config, Arc::new(feeds)))
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Fetch every configured feed in order and keep the first qualifying entries.
    pub async fn fetch_articles(&self) -> Vec<ArticleRecord> {
        let mut articles = Vec::new();

        for feed_url in &self.config.feeds {
            if articles.len() >= self.config.max_articles {
                break;
            }

            let entries = match self.feeds.fetch(feed_url).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(feed_url = %feed_url, error = %e, "Skipping feed");
                    continue;
                }
            };

            for entry in entries {
                if articles.len() >= self.config.max_articles {
                    break;
                }
                if is_relevant(&entry, &self.config) {
                    articles.push(to_article(entry, feed_url));
                }
            }
        }

        articles
    }
}

fn to_article(entry: FeedEntry, feed_url: &str) -> ArticleRecord {
    let published = entry
        .published
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
    ArticleRecord::new(entry.title, entry.link, entry.summary, published, feed_url)
}

/// Whether an entry passes the configured category and keyword lists.
///
/// Matching is a case-insensitive substring test over title and summary.
pub fn is_relevant(entry: &FeedEntry, config: &CrawlerConfig) -> bool {
    if config.filter_mode == FilterMode::PassThrough {
        return true;
    }

    let haystack = format!("{}\n{}", entry.title, entry.summary).to_lowercase();
    let matches = |term: &String| haystack.contains(&term.to_lowercase());

    if config.categories.exclude.iter().any(matches) {
        return false;
    }
    if !config.categories.include.is_empty() && !config.categories.include.iter().any(matches) {
        return false;
    }
    if !config.keywords.is_empty() && !config.keywords.iter().any(matches) {
        return false;
    }

    true
}

#[async_trait]
impl MessageHandler for CrawlerAgent {
    fn name(&self) -> &str {
        "crawler"
    }

    fn description(&self) -> &str {
        CRAWLER_DESCRIPTION
    }

    async fn handle_message(&self, message: &Message) -> Result<Message> {
        if message.text().is_none() {
            return Ok(message.reply_text(CRAWLER_DESCRIPTION));
        }

        let articles = self.fetch_articles().await;
        info!(
            agent = %self.name(),
            feeds = self.config.feeds.len(),
            articles = articles.len(),
            "Crawl finished"
        );

        Ok(message.reply_text(serde_json::to_string_pretty(&articles)?))
    }
}
