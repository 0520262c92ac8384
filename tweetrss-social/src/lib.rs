//! Social network clients used by tweetrss.
//!
//! Only the Twitter REST v1.1 surface needed for feeds is implemented: trends
//! for a location, the home timeline and tweet search.
pub mod twitter;
