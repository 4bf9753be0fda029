//! `generate_post`: render a checked claim as a static-site post.

use crate::config::PostsConfig;
use crate::tools::GeneratePostInput;
use factcheck_common::{FactCheckError, PostAck, Result};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tracing::{info, warn};

/// `<first 16 hex chars of sha256(statement)>.md`
pub fn post_file_name(statement: &str) -> String {
    let digest = hex::encode(Sha256::digest(statement.as_bytes()));
    format!("{}.md", &digest[..16])
}

/// Front matter plus the statement as body.
pub fn render_post(input: &GeneratePostInput) -> Result<String> {
    let name = post_file_name(&input.statement);
    let title = format!("Claim {}", name.trim_end_matches(".md"));

    // JSON strings are valid YAML double-quoted scalars.
    Ok(format!(
        "---\ntitle: {}\nverified: {}\nsource: {}\n---\n\n{}\n",
        serde_json::to_string(&title)?,
        input.verified,
        serde_json::to_string(&input.source)?,
        input.statement
    ))
}

pub struct PostWriter {
    config: PostsConfig,
}

impl PostWriter {
    pub fn new(config: PostsConfig) -> Self {
        Self { config }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.config.site_dir.join("_posts")
    }

    /// Write the post, then run the site build if one is configured.
    ///
    /// The same statement always maps to the same file, so republishing overwrites.
    pub async fn publish(&self, input: &GeneratePostInput) -> Result<PostAck> {
        let dir = self.posts_dir();
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(post_file_name(&input.statement));
        tokio::fs::write(&path, render_post(input)?).await?;
        info!(path = %path.display(), verified = input.verified, "Post written");

        let status_code = self.build_site().await?;

        Ok(PostAck {
            status_code,
            path: path.display().to_string(),
        })
    }

    /// Exit code of the build command; 0 when none is configured.
    async fn build_site(&self) -> Result<i32> {
        let Some((program, args)) = self.config.build_command.split_first() else {
            return Ok(0);
        };

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(&self.config.site_dir)
            .status()
            .await
            .map_err(|e| FactCheckError::Tool {
                status: 500,
                message: format!("Failed to run site build '{}': {}", program, e),
            })?;

        // Killed by a signal: no exit code.
        let code = status.code().unwrap_or(-1);
        if code != 0 {
            warn!(program = %program, code, "Site build failed");
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(statement: &str) -> GeneratePostInput {
        GeneratePostInput {
            statement: statement.into(),
            verified: true,
            source: "https://www.wikidata.org/wiki/Q1".into(),
        }
    }

    #[test]
    fn test_file_name_is_stable() {
        let name = post_file_name("Water boils at 100C");

        assert_eq!(name.len(), 19);
        assert!(name.ends_with(".md"));
        assert_eq!(name, post_file_name("Water boils at 100C"));
        assert_ne!(name, post_file_name("Water boils at 90C"));
    }

    #[test]
    fn test_render_front_matter() {
        let post = render_post(&GeneratePostInput {
            statement: "He said \"hi\"".into(),
            verified: false,
            source: String::new(),
        })
        .unwrap();

        assert!(post.starts_with("---\ntitle: \"Claim "));
        assert!(post.contains("\nverified: false\n"));
        assert!(post.contains("\nsource: \"\"\n"));
        assert!(post.ends_with("---\n\nHe said \"hi\"\n"));
    }

    #[tokio::test]
    async fn test_publish_without_build() {
        let site = tempfile::tempdir().unwrap();
        let writer = PostWriter::new(PostsConfig {
            site_dir: site.path().to_path_buf(),
            build_command: Vec::new(),
        });

        let ack = writer.publish(&input("Water boils at 100C")).await.unwrap();

        assert!(ack.is_published());
        let written = std::fs::read_to_string(&ack.path).unwrap();
        assert!(written.contains("Water boils at 100C"));
        assert!(ack.path.contains("_posts"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_exit_code_is_reported() {
        let site = tempfile::tempdir().unwrap();
        let writer = PostWriter::new(PostsConfig {
            site_dir: site.path().to_path_buf(),
            build_command: vec!["sh".into(), "-c".into(), "exit 3".into()],
        });

        let ack = writer.publish(&input("claim")).await.unwrap();
        assert_eq!(ack.status_code, 3);
        assert!(!ack.is_published());
    }

    #[tokio::test]
    async fn test_missing_build_program_is_tool_failure() {
        let site = tempfile::tempdir().unwrap();
        let writer = PostWriter::new(PostsConfig {
            site_dir: site.path().to_path_buf(),
            build_command: vec!["definitely-not-a-site-builder".into()],
        });

        let err = writer.publish(&input("claim")).await.unwrap_err();
        assert!(matches!(err, FactCheckError::Tool { status: 500, .. }));
    }
}
