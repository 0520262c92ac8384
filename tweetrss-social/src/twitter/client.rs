//! OAuth1-signed wrapper around the Twitter REST v1.1 read endpoints.
//!
//! Every call is a single signed GET; errors bubble up with the endpoint
//! attached as context and are never retried.
use crate::twitter::source::TwitterSource;
use crate::twitter::types::{SearchResponse, Trend, TrendLocation, Tweet};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use tweetrss_http::{HttpClient, OAuth1Credentials, RequestOpts};

const TRENDS_PLACE: &str = "1.1/trends/place.json";
const HOME_TIMELINE: &str = "1.1/statuses/home_timeline.json";
const SEARCH_TWEETS: &str = "1.1/search/tweets.json";

#[derive(Clone)]
pub struct TwitterApi {
    http: HttpClient,
    credentials: OAuth1Credentials,
}

impl TwitterApi {
    /// `base` is normally `https://api.twitter.com`; tests point it at a mock server.
    pub fn new(base: &str, credentials: OAuth1Credentials) -> Result<Self> {
        let http = HttpClient::new(base).context("twitter base url")?;
        Ok(Self { http, credentials })
    }

    async fn signed_get<T>(&self, path: &str, query: Vec<(&str, Cow<'_, str>)>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .get_json(
                path,
                RequestOpts {
                    oauth: Some(&self.credentials),
                    query,
                },
            )
            .await
            .with_context(|| format!("GET {path} failed"))?;
        Ok(resp)
    }
}

#[async_trait]
impl TwitterSource for TwitterApi {
    async fn trends_place(&self, woeid: i64) -> Result<Vec<Trend>> {
        let locations: Vec<TrendLocation> = self
            .signed_get(TRENDS_PLACE, vec![("id", woeid.to_string().into())])
            .await?;

        let trends = locations
            .into_iter()
            .next()
            .map(|loc| loc.trends)
            .unwrap_or_default();
        tracing::debug!(woeid, trend_count = trends.len(), "twitter.trends_place");
        Ok(trends)
    }

    async fn home_timeline(&self, count: u32) -> Result<Vec<Tweet>> {
        let tweets: Vec<Tweet> = self
            .signed_get(
                HOME_TIMELINE,
                vec![
                    ("count", count.to_string().into()),
                    ("tweet_mode", "extended".into()),
                ],
            )
            .await?;
        tracing::debug!(count, received = tweets.len(), "twitter.home_timeline");
        Ok(tweets)
    }

    async fn search_tweets(&self, query: &str, count: u32) -> Result<Vec<Tweet>> {
        let resp: SearchResponse = self
            .signed_get(
                SEARCH_TWEETS,
                vec![
                    ("q", query.into()),
                    ("count", count.to_string().into()),
                    ("tweet_mode", "extended".into()),
                ],
            )
            .await?;
        tracing::debug!(query, count, received = resp.statuses.len(), "twitter.search_tweets");
        Ok(resp.statuses)
    }
}
