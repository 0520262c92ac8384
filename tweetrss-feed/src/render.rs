//! RSS 2.0 serialization.
//!
//! Each entity has exactly one render function and escaping happens only
//! here: item titles, image alt text and the channel's text fields go
//! through [`escape`]; item descriptions go into CDATA untouched; URLs are
//! emitted as given.

use crate::model::{Feed, FeedItem, ImageRef};

/// Hub advertised to PubSubHubbub subscribers.
pub const HUB_URL: &str = "http://pubsubhubbub.appspot.com";

/// Which shape [`render`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// A complete RSS document with prolog, root and channel.
    #[default]
    Document,
    /// Only the `<item>` elements, for embedding into another document.
    TagOnly,
}

/// Replace `&`, then `<`, then `>` with their entities.
///
/// `&` goes first so the ampersands introduced by the later replacements
/// are not escaped again.
///
/// ```
/// use tweetrss_feed::render::escape;
///
/// assert_eq!(escape("A & B <C>"), "A &amp; B &lt;C&gt;");
/// ```
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render_image(image: &ImageRef) -> String {
    format!(r#"<img src="{}" alt="{}"></img>"#, image.url, escape(&image.alt))
}

pub fn render_images(images: &[ImageRef]) -> String {
    images.iter().map(render_image).collect()
}

/// Wrap `content` in CDATA. A literal `]]>` is split across two sections so
/// the parsed text still equals `content`.
fn cdata(content: &str) -> String {
    format!("<![CDATA[{}]]>", content.replace("]]>", "]]]]><![CDATA[>"))
}

/// Render one `<item>`. An absent item renders as the empty string.
pub fn render_item(item: Option<&FeedItem>) -> String {
    let Some(item) = item else {
        return String::new();
    };
    let description = format!("{}{}", render_images(&item.images), item.description);
    format!(
        "<item><title>{}</title><link>{}</link><description>{}</description><pubDate>{}</pubDate></item>",
        escape(&item.title),
        item.link,
        cdata(&description),
        item.pub_date
    )
}

/// Tag-only output: the items joined by newlines, no wrapper.
pub fn render_items(items: &[FeedItem]) -> String {
    items
        .iter()
        .map(|item| render_item(Some(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A complete RSS 2.0 document for `feed`.
pub fn render_document(feed: &Feed) -> String {
    let mut items = String::new();
    for item in &feed.items {
        items.push_str(&render_item(Some(item)));
        items.push('\n');
    }

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<rss xmlns:atom="http://www.w3.org/2005/Atom" version="2.0">
<channel>
<title>{title}</title><link>{link}</link>
<atom:link href="{href}" rel="self" type="application/rss+xml"/>
<atom:link rel="hub" href="{hub}"/>
<description>{description}</description>
<language></language>
{items}</channel>
</rss>"#,
        title = escape(&feed.title),
        link = feed.link,
        href = escape(&feed.href),
        hub = HUB_URL,
        description = escape(&feed.description),
        items = items,
    )
}

pub fn render(feed: &Feed, mode: RenderMode) -> String {
    match mode {
        RenderMode::Document => render_document(feed),
        RenderMode::TagOnly => render_items(&feed.items),
    }
}
