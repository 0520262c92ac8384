//! One API round trip per request, mapped into a [`Feed`].

use crate::clock::Clock;
use crate::mapper::{self, TWITTER_WEB};
use crate::model::Feed;
use tweetrss_common::{Result, TweetRssError};
use tweetrss_social::twitter::TwitterSource;

/// What to build a feed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    Trend {
        woeid: i64,
    },
    Timeline {
        count: u32,
    },
    Search {
        query: String,
        count: u32,
        modifiers: Vec<String>,
    },
}

pub struct FeedFetcher<S, C> {
    source: S,
    clock: C,
    /// Prefix for every feed's self `href`.
    domain: String,
}

impl<S, C> FeedFetcher<S, C>
where
    S: TwitterSource,
    C: Clock,
{
    pub fn new(source: S, clock: C, domain: impl Into<String>) -> Self {
        Self {
            source,
            clock,
            domain: domain.into(),
        }
    }

    pub async fn fetch(&self, request: FeedRequest) -> Result<Feed> {
        tracing::info!(?request, "feed.fetch.start");
        let feed = match request {
            FeedRequest::Trend { woeid } => self.trend_feed(woeid).await?,
            FeedRequest::Timeline { count } => self.timeline_feed(count).await?,
            FeedRequest::Search {
                query,
                count,
                modifiers,
            } => self.search_feed(&query, count, &modifiers).await?,
        };
        tracing::info!(title = %feed.title, items = feed.items.len(), "feed.fetch.done");
        Ok(feed)
    }

    pub async fn trend_feed(&self, woeid: i64) -> Result<Feed> {
        let trends = self
            .source
            .trends_place(woeid)
            .await
            .map_err(TweetRssError::Upstream)?;

        Ok(Feed {
            title: "Twitter Trend".into(),
            link: TWITTER_WEB.into(),
            href: format!("{}trend", self.domain),
            description: "Twitter Trend".into(),
            items: mapper::trend_items(&trends, &self.clock),
        })
    }

    pub async fn timeline_feed(&self, count: u32) -> Result<Feed> {
        let tweets = self
            .source
            .home_timeline(count)
            .await
            .map_err(TweetRssError::Upstream)?;

        Ok(Feed {
            title: "Twitter HomeTimeline".into(),
            link: TWITTER_WEB.into(),
            href: format!("{}timeline", self.domain),
            description: "Twitter HomeTimeline".into(),
            items: tweets.iter().map(mapper::item_from_tweet).collect(),
        })
    }

    pub async fn search_feed(&self, query: &str, count: u32, modifiers: &[String]) -> Result<Feed> {
        if query.trim().is_empty() {
            return Err(TweetRssError::Usage("search query must not be empty".into()));
        }

        let tweets = self
            .source
            .search_tweets(&mapper::search_query(query, modifiers), count)
            .await
            .map_err(TweetRssError::Upstream)?;

        let title = format!("Twitter Search ({query})");
        Ok(Feed {
            description: title.clone(),
            title,
            link: TWITTER_WEB.into(),
            href: format!("{}search/{}", self.domain, urlencoding::encode(query)),
            items: tweets.iter().map(mapper::item_from_tweet).collect(),
        })
    }
}
