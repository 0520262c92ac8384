use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tweetrss_common::observability::{LogConfig, init_logging};
use tweetrss_common::{Result, TweetRssError};
use tweetrss_config::{TweetRssConfig, TweetRssConfigLoader};
use tweetrss_feed::render::render;
use tweetrss_feed::{FeedFetcher, SystemClock};
use tweetrss_social::twitter::TwitterApi;

use cli::Cli;
mod cli;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1) --help and --version need no credentials; every other failure
    //    reports a missing credential ahead of a bad command line
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            if let Err(err) = load_config(None) {
                return report(err);
            }
            e.exit()
        }
    };

    // 2) Logs go to stderr only; stdout may carry the feed
    if let Err(e) = init_logging(LogConfig {
        format: cli.log_format.into(),
        ..LogConfig::default()
    }) {
        eprintln!("tweetrss: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: TweetRssError) -> ExitCode {
    tracing::debug!(kind = err.kind(), "tweetrss.failed");
    eprintln!("tweetrss: {err}");
    ExitCode::FAILURE
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let mode = cli.render_mode();

    let api = TwitterApi::new(&cfg.api_base, cfg.credentials.clone())
        .map_err(TweetRssError::Upstream)?;
    let fetcher = FeedFetcher::new(api, SystemClock, cfg.domain.clone());
    let feed = fetcher
        .fetch(cli.mode.into_request(cfg.woeid, cfg.count))
        .await?;

    output::write_feed(cli.output.as_deref(), &render(&feed, mode)).await
}

fn load_config(file: Option<&std::path::Path>) -> Result<TweetRssConfig> {
    let mut loader = TweetRssConfigLoader::new();
    if let Some(path) = file {
        loader = loader.with_file(path);
    }
    loader
        .load()
        .map_err(|e| TweetRssError::Config(e.to_string()))
}
