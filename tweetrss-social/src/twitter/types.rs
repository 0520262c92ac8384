use serde::{Deserialize, Serialize};

/// One element of the `trends/place` response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendLocation {
    #[serde(default)]
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Tweet>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchMetadata {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    #[serde(default)]
    pub id_str: Option<String>,
    /// Untruncated text, present when requested with `tweet_mode=extended`.
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Kept exactly as the API formats it, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
    #[serde(default)]
    pub created_at: String,
    pub user: User,
    #[serde(default)]
    pub entities: Option<Entities>,
    #[serde(default)]
    pub extended_entities: Option<ExtendedEntities>,
}

impl Tweet {
    /// Full text when available, else the (possibly truncated) legacy text.
    pub fn body(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
}

impl User {
    pub fn profile_image(&self) -> &str {
        self.profile_image_url_https
            .as_deref()
            .or(self.profile_image_url.as_deref())
            .unwrap_or_default()
    }
}

/// Legacy entities; `media` holds at most the first attached photo.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Entities {
    #[serde(default)]
    pub media: Option<Vec<MediaEntity>>,
}

/// Every attached media item (up to four photos).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtendedEntities {
    #[serde(default)]
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaEntity {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_url_https: Option<String>,
}

impl MediaEntity {
    pub fn url(&self) -> &str {
        self.media_url_https
            .as_deref()
            .or(self.media_url.as_deref())
            .unwrap_or_default()
    }
}
