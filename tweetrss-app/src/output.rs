//! The single write at the end of an invocation.
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tweetrss_common::{Result, TweetRssError};

/// Write `body` to `path` (created or truncated), or to stdout followed by a
/// newline when no path is given.
pub async fn write_feed(path: Option<&Path>, body: &str) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, body)
                .await
                .map_err(|source| TweetRssError::Output {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::info!(path = %path.display(), bytes = body.len(), "feed.written");
            Ok(())
        }
        None => write_stdout(body).await.map_err(|source| TweetRssError::Output {
            path: PathBuf::from("<stdout>"),
            source,
        }),
    }
}

async fn write_stdout(body: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(body.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
