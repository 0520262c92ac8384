//! Minimal HTTP client with safe logging and OAuth1 user-context signing.
//!
//! - Request options: OAuth1 credentials and query params
//! - Query strings are percent-encoded exactly the way [`oauth1`] signs them
//! - Redacts sensitive query params and never logs secret values
//! - One attempt per call; failures surface immediately as [`HttpError`]
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), tweetrss_http::HttpError> {
//! let client = tweetrss_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .get_json("v1/items", tweetrss_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! Observability: structured `tracing` events are emitted for request start,
//! response status, body snippets (truncated, at `trace`) and final errors.

pub mod oauth1;

pub use oauth1::OAuth1Credentials;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

const SECRET_QUERY_KEYS: [&str; 9] = [
    "access_token",
    "authorization",
    "auth",
    "key",
    "api_key",
    "token",
    "secret",
    "client_secret",
    "bearer",
];

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}, request_id={request_id}")]
    Api {
        status: StatusCode,
        message: String,
        request_id: String,
    },
}

// ==============================
// Request Options
// ==============================

/// Per-request options for the HTTP client.
///
/// ```
/// use tweetrss_http::RequestOpts;
///
/// let opts = RequestOpts {
///     query: vec![("count", "20".into())],
///     ..Default::default()
/// };
///
/// assert_eq!(opts.query.len(), 1);
/// assert!(opts.oauth.is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    /// Sign the request as this OAuth1 user.
    pub oauth: Option<&'a OAuth1Credentials>,
    pub query: Vec<(&'a str, Cow<'a, str>)>,
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            timeout: Duration::from_secs(15),
        })
    }

    /// GET JSON, optionally OAuth1-signed, with the given query.
    pub async fn get_json<T>(&self, path: &str, opts: RequestOpts<'_>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        self.request_json(Method::GET, path, opts).await
    }

    async fn request_json<T>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOpts<'_>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let pairs: Vec<(&str, &str)> = opts.query.iter().map(|(k, v)| (*k, v.as_ref())).collect();

        // Signed over the bare URL; the query is attached afterwards.
        let authorization = opts.oauth.map(|creds| {
            oauth1::authorization_header(
                creds,
                method.as_str(),
                url.as_str(),
                &pairs,
                &uuid::Uuid::new_v4().simple().to_string(),
                chrono::Utc::now().timestamp(),
            )
        });

        if !pairs.is_empty() {
            let encoded = pairs
                .iter()
                .map(|(k, v)| format!("{}={}", oauth1::percent_encode(k), oauth1::percent_encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&encoded));
        }

        let timeout = self.timeout;
        let mut rb = self.inner.request(method.clone(), url.clone()).timeout(timeout);
        if let Some(value) = authorization {
            let value =
                HeaderValue::from_str(&value).map_err(|e| HttpError::Build(e.to_string()))?;
            rb = rb.header(AUTHORIZATION, value);
        }

        let req_id = uuid::Uuid::new_v4().simple().to_string();
        tracing::debug!(
            req_id=%req_id,
            method=%method,
            host_path=%format!("{}{}", url.host_str().unwrap_or("-"), url.path()),
            query=?redact_query(&pairs),
            timeout_ms=timeout.as_millis() as u64,
            signed=opts.oauth.is_some(),
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb.send().await.map_err(|err| {
            tracing::debug!(req_id=%req_id, message=%err, "http.network_error.send");
            HttpError::Network(err.to_string())
        })?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await.map_err(|err| {
            tracing::debug!(req_id=%req_id, message=%err, "http.network_error.body");
            HttpError::Network(err.to_string())
        })?;

        let x_request_id = headers
            .get("x-request-id")
            .or_else(|| headers.get("x-transaction-id"))
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        tracing::debug!(
            req_id=%req_id,
            %status,
            duration_ms=t0.elapsed().as_millis() as u64,
            body_len=bytes.len(),
            x_request_id=%x_request_id,
            "http.response.headers"
        );

        let snippet = snip_body(&bytes);
        tracing::trace!(req_id=%req_id, body_snippet=%snippet, "http.response.body_snippet");

        if status.is_success() {
            return serde_json::from_slice::<T>(&bytes).map_err(|e| {
                tracing::debug!(
                    req_id=%req_id,
                    serde_line=%e.line(),
                    serde_col=%e.column(),
                    serde_err=%e,
                    body_snippet=%snippet,
                    "http.response.decode_error"
                );
                HttpError::Decode(e.to_string(), snippet)
            });
        }

        let message = extract_error_message(&bytes);
        tracing::debug!(
            req_id=%req_id,
            %status,
            message=%message,
            x_request_id=%x_request_id,
            "http.error"
        );
        Err(HttpError::Api {
            status,
            message,
            request_id: x_request_id,
        })
    }
}

// ==============================
// Helpers
// ==============================

fn extract_error_message(body: &[u8]) -> String {
    // Twitter: {"errors":[{"message":"...", "code": 32}]}
    #[derive(Deserialize)]
    struct TwErrors {
        errors: Vec<TwErr>,
    }
    #[derive(Deserialize)]
    struct TwErr {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        title: String,
    }

    // Generic: {"message":"..."} or {"detail":"..."} or {"error":"..."}
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    let first = serde_json::from_slice::<TwErrors>(body)
        .ok()
        .and_then(|tw| tw.errors.into_iter().next());
    if let Some(first) = first {
        for candidate in [first.message, first.detail, first.title] {
            if !candidate.is_empty() {
                return candidate;
            }
        }
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        for candidate in [m.message, m.detail, m.error] {
            if !candidate.is_empty() {
                return candidate;
            }
        }
    }
    snip_body(body)
}

fn redact_query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| {
            let is_secret = SECRET_QUERY_KEYS.contains(&k.to_ascii_lowercase().as_str());
            (
                (*k).to_string(),
                if is_secret {
                    "<redacted>".to_string()
                } else {
                    (*v).to_string()
                },
            )
        })
        .collect()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        let mut cut = 500;
        while !snip.is_char_boundary(cut) {
            cut -= 1;
        }
        snip.truncate(cut);
        snip.push_str("...");
    }
    snip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_error_shape_is_preferred() {
        let body = br#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#;
        assert_eq!(extract_error_message(body), "Could not authenticate you.");
    }

    #[test]
    fn generic_error_shapes_fall_back() {
        assert_eq!(extract_error_message(br#"{"detail":"Too Many Requests"}"#), "Too Many Requests");
        assert_eq!(extract_error_message(b"<html>oops</html>"), "<html>oops</html>");
    }

    #[test]
    fn secret_query_values_are_redacted() {
        let shown = redact_query(&[("count", "20"), ("token", "abc")]);
        assert_eq!(shown[0], ("count".into(), "20".into()));
        assert_eq!(shown[1], ("token".into(), "<redacted>".into()));
    }

    #[test]
    fn snippets_respect_char_boundaries() {
        let body = "é".repeat(400);
        let snip = snip_body(body.as_bytes());
        assert!(snip.ends_with("..."));
        assert!(snip.len() <= 503);
    }
}
