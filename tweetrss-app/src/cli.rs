//! Command-line surface of the `tweetrss` binary.
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tweetrss_common::observability::LogFormat;
use tweetrss_feed::{FeedRequest, RenderMode};

#[derive(Debug, Parser)]
#[command(name = "tweetrss", version)]
#[command(about = "Render Twitter trends, timelines and searches as RSS 2.0", long_about = None)]
pub struct Cli {
    /// Write the feed to this file instead of stdout (created or truncated)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print only the <item> elements rather than the full document
    #[arg(short, long, global = true)]
    pub tag_only: bool,

    /// YAML file layered under the TWITTER_* environment
    #[arg(long, global = true, value_name = "FILE", env = "TWEETRSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Encoding of diagnostic logs on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Mode {
    /// Trending topics for a location, ten per item
    Trend {
        /// "Where on earth" id; defaults to the configured woeid
        #[arg(long)]
        woeid: Option<i64>,
    },
    /// The authenticated user's home timeline
    Timeline {
        /// Tweets to request; defaults to the configured count
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,
    },
    /// Tweets matching QUERY, with any MODIFIERs appended verbatim
    Search {
        /// Tweets to request; defaults to the configured count
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,

        query: String,

        #[arg(value_name = "MODIFIER", trailing_var_arg = true, allow_hyphen_values = true)]
        modifiers: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    pub fn render_mode(&self) -> RenderMode {
        if self.tag_only {
            RenderMode::TagOnly
        } else {
            RenderMode::Document
        }
    }
}

impl Mode {
    /// Resolve the request, filling unset options from configured defaults.
    pub fn into_request(self, default_woeid: i64, default_count: u32) -> FeedRequest {
        match self {
            Mode::Trend { woeid } => FeedRequest::Trend {
                woeid: woeid.unwrap_or(default_woeid),
            },
            Mode::Timeline { count } => FeedRequest::Timeline {
                count: count.unwrap_or(default_count),
            },
            Mode::Search {
                count,
                query,
                modifiers,
            } => FeedRequest::Search {
                query,
                count: count.unwrap_or(default_count),
                modifiers,
            },
        }
    }
}
