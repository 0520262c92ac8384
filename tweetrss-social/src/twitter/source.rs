use crate::twitter::types::{Trend, Tweet};
use anyhow::Result;
use async_trait::async_trait;

/// The three read-only queries a feed can be built from.
///
/// [`TwitterApi`](crate::twitter::TwitterApi) is the production
/// implementation; tests substitute canned responses.
#[async_trait]
pub trait TwitterSource: Send + Sync {
    /// Trending topics for a "where on earth" id, in API order.
    async fn trends_place(&self, woeid: i64) -> Result<Vec<Trend>>;

    /// Up to `count` tweets from the authenticated user's home timeline.
    async fn home_timeline(&self, count: u32) -> Result<Vec<Tweet>>;

    /// Up to `count` tweets matching `query`, sent to the API as-is.
    async fn search_tweets(&self, query: &str, count: u32) -> Result<Vec<Tweet>>;
}
