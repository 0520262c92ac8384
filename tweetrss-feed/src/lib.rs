//! Feed construction and RSS 2.0 rendering.
//!
//! - [`model`]: the `Feed` / `FeedItem` / `ImageRef` value types
//! - [`mapper`]: pure conversions from API responses into feed items
//! - [`fetch`]: one API round trip per [`FeedRequest`], producing a [`Feed`]
//! - [`render`]: XML serialization, with escaping enforced in one place
//! - [`clock`]: the time source trend batches are stamped with
pub mod clock;
pub mod fetch;
pub mod mapper;
pub mod model;
pub mod render;

pub use clock::{Clock, SystemClock};
pub use fetch::{FeedFetcher, FeedRequest};
pub use model::{Feed, FeedItem, ImageRef};
pub use render::RenderMode;
