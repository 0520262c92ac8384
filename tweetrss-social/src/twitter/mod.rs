//! Twitter REST v1.1 integration surface.
//!
//! `types` holds the response models, `source` the read-only query trait the
//! feed layer depends on, and `client` the OAuth1-signed implementation.
pub mod client;
pub mod source;
pub mod types;

pub use client::TwitterApi;
pub use source::TwitterSource;
