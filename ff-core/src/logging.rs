//! Structured logging setup using the `tracing` ecosystem.
//!
//! Library crates only emit events. The `fbfacade` binary installs the
//! subscriber once at startup with [`init_logging`].

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{FbError, FbResult};

/// File name prefix of the daily log files.
pub const LOG_FILE_PREFIX: &str = "fbfacade.log";

/// Install the global subscriber: compact stderr output plus a daily file
/// under `log_dir`, written as JSON lines when `json_output` is set.
///
/// `level` is an `EnvFilter` directive such as `"debug"` or
/// `"ff_graph=trace,info"`. Unparseable directives fall back to `info`.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> FbResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));

    let console = fmt::layer().with_writer(std::io::stderr).with_target(true).compact();
    let json_file = json_output.then(|| {
        fmt::layer()
            .with_writer(writer.clone())
            .json()
            .with_file(true)
            .with_line_number(true)
    });
    let plain_file = (!json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(level_filter(level))
        .with(console)
        .with(json_file)
        .with(plain_file)
        .try_init()
        .map_err(|e| FbError::Internal(format!("logging already initialized: {e}")))?;

    tracing::debug!(level, dir = %log_dir.display(), json_output, "logging initialized");
    Ok(LogGuard { _guard: guard })
}

/// Parse a filter directive, defaulting to `info`.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Flushes buffered file output when dropped. Hold it for the life of
/// the process.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}
