//! Startup configuration: OAuth1 credentials plus feed settings.
//!
//! Values come from `TWITTER_`-prefixed environment variables, optionally
//! layered over a YAML file. The environment always wins. String values may
//! reference other variables as `${VAR}`.
//!
//! | key                   | environment variable          | default   |
//! |-----------------------|-------------------------------|-----------|
//! | `consumer_key`        | `TWITTER_CONSUMER_KEY`        | required  |
//! | `consumer_secret`     | `TWITTER_CONSUMER_SECRET`     | required  |
//! | `access_token`        | `TWITTER_ACCESS_TOKEN`        | required  |
//! | `access_token_secret` | `TWITTER_ACCESS_TOKEN_SECRET` | required  |
//! | `domain`              | `TWITTER_DOMAIN`              | `""`      |
//! | `woeid`               | `TWITTER_WOEID`               | `1118285` |
//! | `count`               | `TWITTER_COUNT`               | `200`     |
//! | `api_base`            | `TWITTER_API_BASE`            | `https://api.twitter.com` |
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tweetrss_http::OAuth1Credentials;

const ENV_PREFIX: &str = "TWITTER";
const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Tokyo.
pub const DEFAULT_WOEID: i64 = 1118285;
pub const DEFAULT_COUNT: u32 = 200;
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("environment variable {0} must be set to use the REST API")]
    MissingCredential(&'static str),
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// Validated settings for one invocation.
#[derive(Debug, Clone)]
pub struct TweetRssConfig {
    pub credentials: OAuth1Credentials,
    /// Prefix of every feed's self-referencing `href`.
    pub domain: String,
    /// "Where on earth" id used by trend mode.
    pub woeid: i64,
    /// Root the REST paths are joined onto.
    pub api_base: String,
    /// Default number of tweets requested by timeline and search modes.
    pub count: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    access_token_secret: Option<String>,
    domain: Option<String>,
    woeid: Option<i64>,
    api_base: Option<String>,
    count: Option<u32>,
}

fn expand_env(raw: String) -> String {
    if !raw.contains('$') {
        return raw;
    }
    let mut cur = raw;
    for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
        let expanded = match shellexpand::env(&cur) {
            Ok(cow) => cow.into_owned(),
            Err(_) => break,
        };
        if expanded == cur {
            break;
        }
        cur = expanded;
    }
    cur
}

fn required(value: Option<String>, var: &'static str) -> Result<String, ConfigLoadError> {
    value
        .map(expand_env)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigLoadError::MissingCredential(var))
}

impl RawConfig {
    fn validate(self) -> Result<TweetRssConfig, ConfigLoadError> {
        let credentials = OAuth1Credentials {
            consumer_key: required(self.consumer_key, "TWITTER_CONSUMER_KEY")?,
            consumer_secret: required(self.consumer_secret, "TWITTER_CONSUMER_SECRET")?,
            access_token: required(self.access_token, "TWITTER_ACCESS_TOKEN")?,
            access_token_secret: required(self.access_token_secret, "TWITTER_ACCESS_TOKEN_SECRET")?,
        };

        let count = self.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 {
            return Err(ConfigLoadError::Invalid {
                key: "count",
                reason: "must be at least 1".into(),
            });
        }

        let domain = self.domain.map(expand_env).unwrap_or_default();
        if domain.is_empty() {
            tracing::info!("TWITTER_DOMAIN is not set; feed hrefs will be relative");
        }

        Ok(TweetRssConfig {
            credentials,
            domain,
            woeid: self.woeid.unwrap_or(DEFAULT_WOEID),
            api_base: self
                .api_base
                .map(expand_env)
                .filter(|base| !base.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            count,
        })
    }
}

/// Builder hides the `config` crate wiring (YAML files + env overrides).
pub struct TweetRssConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for TweetRssConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TweetRssConfigLoader {
    /// Start with no files; `load` always adds the `TWITTER_` environment last.
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use tweetrss_config::TweetRssConfigLoader;
    ///
    /// let cfg = temp_env::with_vars_unset(
    ///     [
    ///         "TWITTER_CONSUMER_KEY",
    ///         "TWITTER_CONSUMER_SECRET",
    ///         "TWITTER_ACCESS_TOKEN",
    ///         "TWITTER_ACCESS_TOKEN_SECRET",
    ///         "TWITTER_DOMAIN",
    ///         "TWITTER_WOEID",
    ///         "TWITTER_COUNT",
    ///         "TWITTER_API_BASE",
    ///     ],
    ///     || {
    ///         TweetRssConfigLoader::new()
    ///             .with_yaml_str(
    ///                 r#"
    /// consumer_key: ck
    /// consumer_secret: cs
    /// access_token: at
    /// access_token_secret: ats
    /// domain: "https://feeds.example.com/"
    /// woeid: 23424856
    /// "#,
    ///             )
    ///             .load()
    ///     },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(cfg.domain, "https://feeds.example.com/");
    /// assert_eq!(cfg.woeid, 23424856);
    /// assert_eq!(cfg.count, 200);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge every source and validate the result.
    ///
    /// Fails with [`ConfigLoadError::MissingCredential`] naming the first
    /// credential variable that is unset or blank.
    pub fn load(self) -> Result<TweetRssConfig, ConfigLoadError> {
        let cfg = self
            .builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let raw: RawConfig = cfg.try_deserialize()?;
        raw.validate()
    }
}
