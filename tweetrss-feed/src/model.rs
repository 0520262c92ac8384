/// One RSS channel, built once per invocation and rendered once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feed {
    pub title: String,
    /// Channel URL.
    pub link: String,
    /// Self-referencing feed URL, emitted as the `rel="self"` atom link.
    pub href: String,
    pub description: String,
    /// Display order.
    pub items: Vec<FeedItem>,
}

/// One trend batch, timeline tweet or search result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedItem {
    /// Escaped at render time.
    pub title: String,
    pub link: String,
    /// Raw HTML; rendered inside CDATA without escaping.
    pub description: String,
    /// Display string, not parsed.
    pub pub_date: String,
    /// Author/profile image first, then attached media.
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}
