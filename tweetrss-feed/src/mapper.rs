//! Pure conversions from Twitter responses into feed items.

use crate::clock::Clock;
use crate::model::{FeedItem, ImageRef};
use tweetrss_social::twitter::types::{Trend, Tweet};

pub const TWITTER_WEB: &str = "https://twitter.com";

/// Trends per feed item.
pub const TREND_BATCH: usize = 10;

/// Group trends into items of [`TREND_BATCH`], numbered continuously from 1.
///
/// Only full batches become items; a trailing partial batch is dropped.
/// Every batch reads the clock again when it is built.
pub fn trend_items(trends: &[Trend], clock: &dyn Clock) -> Vec<FeedItem> {
    let dropped = trends.len() % TREND_BATCH;
    if dropped > 0 {
        tracing::debug!(total = trends.len(), dropped, "trend remainder dropped");
    }

    trends
        .chunks_exact(TREND_BATCH)
        .enumerate()
        .map(|(batch, chunk)| {
            let first = batch * TREND_BATCH + 1;
            let description: String = chunk
                .iter()
                .zip(first..)
                .map(|(trend, n)| format!(r#"<p>{n}. <a href="{}">{}</a></p>"#, trend.url, trend.name))
                .collect();

            let now = clock.now();
            let date = now.format("%Y/%-m/%-d %-H:%-M").to_string();
            FeedItem {
                title: format!("Twitter Trend {date} ({first}-{})", first + TREND_BATCH - 1),
                link: format!("{TWITTER_WEB}/{date}"),
                description,
                pub_date: now.to_rfc2822(),
                images: Vec::new(),
            }
        })
        .collect()
}

pub fn status_url(screen_name: &str, id: u64) -> String {
    format!("{TWITTER_WEB}/{screen_name}/status/{id}")
}

/// One item per tweet. Images start with the author's profile picture; the
/// extended media list, when present, replaces the legacy one entirely.
pub fn item_from_tweet(tweet: &Tweet) -> FeedItem {
    let user = &tweet.user;
    let screen_name = user.screen_name.as_str();

    let media = match &tweet.extended_entities {
        Some(extended) => extended.media.as_slice(),
        None => tweet
            .entities
            .as_ref()
            .and_then(|e| e.media.as_deref())
            .unwrap_or_default(),
    };

    let images = std::iter::once(ImageRef::new(user.profile_image(), screen_name))
        .chain(media.iter().map(|m| ImageRef::new(m.url(), screen_name)))
        .collect();

    FeedItem {
        title: format!("{screen_name}@{}", user.name),
        link: status_url(screen_name, tweet.id),
        description: tweet.body().to_string(),
        pub_date: tweet.created_at.clone(),
        images,
    }
}

/// The search string sent upstream: query then modifiers, space separated.
pub fn search_query(query: &str, modifiers: &[String]) -> String {
    std::iter::once(query)
        .chain(modifiers.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn trends(n: usize) -> Vec<Trend> {
        (1..=n)
            .map(|i| Trend {
                name: format!("trend{i}"),
                url: format!("http://twitter.com/search?q=trend{i}"),
                query: None,
                tweet_volume: None,
            })
            .collect()
    }

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2018, 3, 4, 5, 6, 7)
            .unwrap()
    }

    fn tweet(value: serde_json::Value) -> Tweet {
        serde_json::from_value(value).unwrap()
    }

    fn base_tweet() -> serde_json::Value {
        json!({
            "id": 1050118621198921728u64,
            "full_text": "full text <b>kept</b>",
            "text": "truncated…",
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "user": {
                "name": "Alice A",
                "screen_name": "alice",
                "profile_image_url_https": "https://pbs.twimg.com/profile_images/1/a.jpg"
            }
        })
    }

    #[test]
    fn trend_count_is_floor_of_len_over_ten() {
        let clock = fixed_now;
        for (len, expected) in [(0, 0), (9, 0), (10, 1), (19, 1), (20, 2), (35, 3), (50, 5)] {
            assert_eq!(trend_items(&trends(len), &clock).len(), expected, "len={len}");
        }
    }

    #[test]
    fn trend_numbering_runs_across_batches() {
        let items = trend_items(&trends(25), &fixed_now);
        assert_eq!(items.len(), 2);
        assert!(items[0].description.starts_with(
            r#"<p>1. <a href="http://twitter.com/search?q=trend1">trend1</a></p>"#
        ));
        assert!(items[0].description.ends_with(
            r#"<p>10. <a href="http://twitter.com/search?q=trend10">trend10</a></p>"#
        ));
        assert!(items[1].description.starts_with("<p>11. "));
        assert!(items[1].description.ends_with("trend20</a></p>"));
        assert!(!items[1].description.contains("trend21"));

        let numbers: Vec<usize> = items
            .iter()
            .flat_map(|item| item.description.split("<p>").skip(1))
            .map(|p| p.split('.').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn trend_titles_carry_time_and_range() {
        let items = trend_items(&trends(20), &fixed_now);
        assert_eq!(items[0].title, "Twitter Trend 2018/3/4 5:6 (1-10)");
        assert_eq!(items[1].title, "Twitter Trend 2018/3/4 5:6 (11-20)");
        assert_eq!(items[0].link, "https://twitter.com/2018/3/4 5:6");
        assert_eq!(
            DateTime::parse_from_rfc2822(&items[0].pub_date).unwrap(),
            fixed_now()
        );
        assert!(items[0].images.is_empty());
    }

    #[test]
    fn each_batch_reads_the_clock() {
        let calls = AtomicU32::new(0);
        let clock = || {
            let minute = calls.fetch_add(1, Ordering::SeqCst);
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2020, 1, 1, 0, minute, 0)
                .unwrap()
        };
        let items = trend_items(&trends(30), &clock);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(items[2].title, "Twitter Trend 2020/1/1 0:2 (21-30)");
    }

    #[test]
    fn tweet_maps_to_item() {
        let item = item_from_tweet(&tweet(base_tweet()));
        assert_eq!(item.title, "alice@Alice A");
        assert_eq!(item.link, "https://twitter.com/alice/status/1050118621198921728");
        assert_eq!(item.description, "full text <b>kept</b>");
        assert_eq!(item.pub_date, "Wed Oct 10 20:19:24 +0000 2018");
        assert_eq!(
            item.images,
            vec![ImageRef::new("https://pbs.twimg.com/profile_images/1/a.jpg", "alice")]
        );
    }

    #[test]
    fn extended_media_wins_over_legacy() {
        let mut v = base_tweet();
        v["entities"] = json!({ "media": [ { "media_url_https": "https://img/legacy.jpg" } ] });
        v["extended_entities"] = json!({ "media": [
            { "media_url_https": "https://img/e1.jpg" },
            { "media_url_https": "https://img/e2.jpg" }
        ] });
        let urls: Vec<String> = item_from_tweet(&tweet(v))
            .images
            .into_iter()
            .map(|i| i.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://pbs.twimg.com/profile_images/1/a.jpg",
                "https://img/e1.jpg",
                "https://img/e2.jpg"
            ]
        );
    }

    #[test]
    fn empty_extended_media_still_excludes_legacy() {
        let mut v = base_tweet();
        v["entities"] = json!({ "media": [ { "media_url_https": "https://img/legacy.jpg" } ] });
        v["extended_entities"] = json!({ "media": [] });
        assert_eq!(item_from_tweet(&tweet(v)).images.len(), 1);
    }

    #[test]
    fn legacy_media_used_without_extended() {
        let mut v = base_tweet();
        v["entities"] = json!({ "media": [ { "media_url": "http://img/legacy.jpg" } ] });
        let images = item_from_tweet(&tweet(v)).images;
        assert_eq!(images.len(), 2);
        assert_eq!(images[1], ImageRef::new("http://img/legacy.jpg", "alice"));
    }

    #[test]
    fn search_query_appends_modifiers_verbatim() {
        let mods = vec!["-filter:retweets".to_string(), "lang:ja".to_string()];
        assert_eq!(search_query("rust & co", &mods), "rust & co -filter:retweets lang:ja");
        assert_eq!(search_query("solo", &[]), "solo");
    }
}
