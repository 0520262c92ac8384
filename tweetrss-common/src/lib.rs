//! Types shared by every tweetrss crate.
//!
//! This crate carries the error taxonomy used from the fetch layer up to the
//! binary, plus the tracing bootstrap in [`observability`]. It stays
//! dependency-light so the library crates can pull it in freely.
//!
//! # Overview
//!
//! - [`TweetRssError`] and [`Result`]: terminal error kinds, one per failure class
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! # Examples
//!
//! ```rust
//! use tweetrss_common::TweetRssError;
//!
//! let err = TweetRssError::Usage("search needs a query".into());
//! assert_eq!(err.to_string(), "usage error: search needs a query");
//! assert_eq!(err.kind(), "usage");
//! ```
use std::path::PathBuf;

pub mod observability;

/// Every way a tweetrss invocation can fail.
///
/// None of these are recoverable: the binary reports the error once and
/// exits with a non-zero status.
#[derive(thiserror::Error, Debug)]
pub enum TweetRssError {
    /// A required setting (usually a credential variable) is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The command line asked for something we cannot do.
    #[error("usage error: {0}")]
    Usage(String),

    /// The REST API call failed, either in transport or with an API error.
    #[error("upstream error: {0:#}")]
    Upstream(#[source] anyhow::Error),

    /// The destination file could not be created or written.
    #[error("output error ({}): {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TweetRssError {
    /// Short, stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TweetRssError::Config(_) => "config",
            TweetRssError::Usage(_) => "usage",
            TweetRssError::Upstream(_) => "upstream",
            TweetRssError::Output { .. } => "output",
        }
    }
}

/// Convenient alias for results that use [`TweetRssError`].
pub type Result<T> = std::result::Result<T, TweetRssError>;
