//! Shared observability helpers for the binary and integration tests.
//!
//! stdout is reserved for the rendered feed, so events only ever go to
//! stderr and, when a log directory is configured, to a daily rolling file.
//! Call [`init_logging`] once near process start; later calls are no-ops.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

const LOG_DIR_ENV: &str = "TWEETRSS_LOG_DIR";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Output encoding for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Logical name of the component (used for the log file name).
    pub app_name: &'static str,
    /// Explicit directory for a rolling log file. If `None`, we consult
    /// `TWEETRSS_LOG_DIR`; if that is unset too, no file sink is installed.
    pub log_dir: Option<PathBuf>,
    /// Whether to write events to `stderr`.
    pub emit_stderr: bool,
    /// Preferred log encoding.
    pub format: LogFormat,
    /// Default filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: "tweetrss",
            log_dir: None,
            emit_stderr: true,
            format: LogFormat::Text,
            default_filter: "warn",
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the log file path for the current day when a file sink is active.
/// Subsequent calls hand back the originally resolved value.
pub fn init_logging(config: LogConfig) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = LOG_INIT.get() {
        return Ok(path.clone());
    }

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_path = None;

    if let Some(dir) = resolve_log_dir(config.log_dir.as_deref()) {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

        let log_filename = format!("{}.log", config.app_name);
        let today = Local::now().format("%Y-%m-%d").to_string();
        file_path = Some(dir.join(format!("{log_filename}.{today}")));

        let appender = rolling::daily(dir, log_filename);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);

        layers.push(match config.format {
            LogFormat::Text => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        });
    }

    if config.emit_stderr {
        layers.push(match config.format {
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        });
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = LOG_INIT.set(file_path.clone());
    Ok(file_path)
}

fn resolve_log_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(expand_home(dir));
    }

    std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(|dir| expand_home(Path::new(&dir)))
}

fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_log_dir(Some(dir.path())),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn relative_paths_are_left_alone() {
        assert_eq!(expand_home(Path::new("logs/x")), PathBuf::from("logs/x"));
    }
}
