//! OAuth 1.0a request signing (HMAC-SHA1, RFC 5849).
//!
//! Everything here is pure: callers pass the nonce and timestamp so the
//! signature for a given request can be reproduced in tests.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt;

/// The four secrets of a user-context OAuth1 session.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuth1Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl fmt::Debug for OAuth1Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth1Credentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Percent-encode with the RFC 3986 unreserved set, which is what OAuth signs.
pub fn percent_encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Encode and sort parameters, then join them as `k=v&k=v`.
pub fn normalized_params(params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&encoded(base_url)&encoded(normalized params)`.
///
/// `base_url` must not carry a query string; query parameters belong in
/// `params` together with the `oauth_*` protocol parameters.
pub fn signature_base_string(method: &str, base_url: &str, params: &[(&str, &str)]) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&normalized_params(params))
    )
}

/// Base64 HMAC-SHA1 of `base_string` keyed by the two secrets.
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    // HMAC accepts keys of any length.
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("hmac key of any size");
    mac.update(base_string.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Build the `Authorization: OAuth ...` header value for one request.
pub fn authorization_header(
    creds: &OAuth1Credentials,
    method: &str,
    base_url: &str,
    query: &[(&str, &str)],
    nonce: &str,
    timestamp: i64,
) -> String {
    let timestamp = timestamp.to_string();
    let mut oauth: Vec<(&str, &str)> = vec![
        ("oauth_consumer_key", creds.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", creds.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let mut all = oauth.clone();
    all.extend_from_slice(query);
    let base = signature_base_string(method, base_url, &all);
    let signature = sign(&base, &creds.consumer_secret, &creds.access_token_secret);

    oauth.push(("oauth_signature", signature.as_str()));
    oauth.sort();

    let parts: Vec<String> = oauth
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect();
    format!("OAuth {}", parts.join(", "))
}
